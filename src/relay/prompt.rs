//! The fixed instructional template sent upstream.
//!
//! Wording is part of the product: teachers receive documents shaped by
//! these exact instructions, so changes here change every generated session.

use crate::session::SessionDetails;

/// Persona for the system turn of every conversation.
pub const SYSTEM_PERSONA: &str =
    "Eres un asistente pedagógico experto en primaria y en el currículo MINEDU.";

/// Builds the user turn by substituting the resolved request fields into the
/// instructional template. `details` already carries defaults, so every line
/// below is populated.
pub fn build_prompt(details: &SessionDetails) -> String {
    format!(
        "\
Eres un docente experto en primaria (MINEDU). Genera una sesión de aprendizaje para el área de Matemática.
Campos:
- Institución: {institucion}
- Grado: {grado}
- Docente: {docente}
- Fecha: {fecha}
- Duración: {duracion} minutos
- Campo temático: {campo}
- Enfoque transversal: {transversal}
- Situación significativa: {situacion}

Entrega:
1) Título de la sesión.
2) Datos generales (institución, grado, docente, fecha, duración).
3) Propósitos de aprendizaje (competencia, capacidades, desempeños, criterios, evidencia, instrumento) en formato claro.
4) Competencias transversales y desempeños.
5) Enfoque transversal y acciones/actitudes observables.
6) Secuencia didáctica (Inicio, Desarrollo con 6 fases, Cierre).

Devuélvelo en texto estructurado (preferiblemente en HTML simple o texto formateado) para mostrar en el frontend.",
        institucion = details.institucion,
        grado = details.grado,
        docente = details.docente,
        fecha = details.fecha,
        duracion = details.duracion,
        campo = details.campo,
        transversal = details.transversal,
        situacion = details.situacion,
    )
}
