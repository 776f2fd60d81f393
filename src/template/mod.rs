//! Offline session renderer.
//!
//! Builds the same document the relay asks the completion API for, but
//! deterministically from the static curriculum table. Single pass, simple
//! HTML, suitable for direct display or print.

use crate::curriculum;
use crate::session::SessionDetails;
use std::fmt::Write;

/// Renders the complete session document for the resolved request.
pub fn render(details: &SessionDetails) -> String {
    let meta = curriculum::for_grade_or_generic(&details.grado);
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        "<div class=\"session\">\n\
         <div class=\"session-title\">TÍTULO: {}</div>\n",
        escape_html(&session_title(details))
    );

    let _ = write!(
        html,
        "<div class=\"data-row\">\n\
         <div class=\"data-item\"><strong>Institución</strong><div>{}</div></div>\n\
         <div class=\"data-item\"><strong>Grado</strong><div>{}°</div></div>\n\
         <div class=\"data-item\"><strong>Docente</strong><div>{}</div></div>\n\
         <div class=\"data-item\"><strong>Fecha</strong><div>{}</div></div>\n\
         <div class=\"data-item\"><strong>Duración</strong><div>{} minutos</div></div>\n\
         </div>\n",
        escape_html(&details.institucion),
        escape_html(&details.grado),
        escape_html(&details.docente),
        escape_html(&details.fecha),
        details.duracion,
    );

    html.push_str("<h3>Propósitos de aprendizaje</h3>\n");
    html.push_str(
        "<table class=\"table sixcols\">\n<thead><tr>\
         <th>Competencia</th><th>Capacidades</th><th>Desempeños</th>\
         <th>Criterios de evaluación</th><th>Evidencia de aprendizaje</th><th>Instrumento</th>\
         </tr></thead>\n<tbody>\n",
    );
    let _ = write!(
        html,
        "<tr><td>{}</td><td>{}</td><td>{}</td>\
         <td>Resuelve el problema aplicando estrategias; representa resultados; comunica conclusiones.</td>\
         <td>Producto grupal: registro, exposición, ficha de trabajo.</td>\
         <td>Rúbrica de desempeño y lista de cotejo.</td></tr>\n",
        escape_html(meta.competencia),
        meta.capacidades
            .iter()
            .map(|c| escape_html(c))
            .collect::<Vec<_>>()
            .join("<br>"),
        meta.desempenos
            .iter()
            .map(|d| escape_html(d))
            .collect::<Vec<_>>()
            .join("<br>"),
    );
    html.push_str("</tbody>\n</table>\n");

    html.push_str(
        "<h3>Competencias transversales</h3>\n\
         <table class=\"table\">\n\
         <thead><tr><th>Competencia transversal</th><th>Desempeños integrados</th></tr></thead>\n\
         <tbody>\n\
         <tr><td>Gestiona su aprendizaje de manera autónoma</td><td>Define metas de aprendizaje y organiza acciones; usa recursos; revisa su progreso.</td></tr>\n\
         <tr><td>Organiza acciones estratégicas</td><td>Planifica actividades, colabora con pares y aplica estrategias para alcanzar metas.</td></tr>\n\
         <tr><td>Monitorea y ajusta su desempeño</td><td>Evalúa su trabajo, pide retroalimentación y ajusta procesos para mejorar.</td></tr>\n\
         </tbody>\n</table>\n",
    );

    html.push_str(
        "<h3>Enfoque transversal</h3>\n\
         <table class=\"table\">\n\
         <thead><tr><th>Enfoque</th><th>Actitudes / acciones observables</th></tr></thead>\n\
         <tbody>\n\
         <tr><td>De derechos</td><td>Respeta derechos y participa en decisiones.</td></tr>\n\
         <tr><td>Inclusivo</td><td>Adapta actividades y apoya la diversidad.</td></tr>\n\
         <tr><td>Intercultural</td><td>Valora saberes culturales y tradiciones.</td></tr>\n\
         <tr><td>Igualdad de género</td><td>Promueve participación equitativa.</td></tr>\n\
         <tr><td>Ambiental</td><td>Propone acciones para el cuidado del entorno.</td></tr>\n\
         <tr><td>Bien común</td><td>Contribuye en proyectos comunitarios.</td></tr>\n\
         <tr><td>Excelencia</td><td>Busca mejora continua y calidad en la tarea.</td></tr>\n\
         </tbody>\n</table>\n",
    );

    html.push_str("<h3>Secuencia didáctica</h3>\n<h4>Inicio</h4>\n");
    html.push_str(
        "<p>Bienvenida; presentación del propósito; recuperación de saberes previos mediante \
         preguntas; recordatorio de normas de convivencia.</p>\n",
    );

    html.push_str("<h4>Desarrollo</h4>\n<ol>\n");
    let _ = write!(
        html,
        "<li><strong>Planteamiento del problema:</strong> {}</li>\n",
        escape_html(&details.situacion)
    );
    html.push_str(
        "<li><strong>Familiarización:</strong> Lectura del problema y preguntas guías por parte del docente.</li>\n\
         <li><strong>Búsqueda y ejecución de la estrategia:</strong> Discusión de estrategias, uso de material concreto y procedimientos.</li>\n\
         <li><strong>Socializa sus representaciones:</strong> Exposición de bocetos y soluciones grupales.</li>\n\
         <li><strong>Reflexión y formalización:</strong> Preguntas para consolidar procedimientos y conceptos.</li>\n\
         <li><strong>Planteamiento de otros problemas:</strong> Aplicación a nuevas situaciones.</li>\n\
         </ol>\n",
    );

    html.push_str("<h4>Cierre</h4>\n");
    html.push_str(
        "<p>Preguntas de metacognición: ¿Qué estrategia ayudó más? ¿Qué cambiaría la próxima \
         vez? Registro de evidencias y tareas.</p>\n",
    );

    html.push_str(
        "<hr>\n<div class=\"session-note\">Nota: adapta el lenguaje y complejidad según el \
         grado seleccionado.</div>\n</div>",
    );

    html
}

/// Short title derived from the significant situation: its first eight words
/// plus the grade. Situations under six characters fall back to
/// `{campo} - Sesión {grado}°`.
pub fn session_title(details: &SessionDetails) -> String {
    let situacion = details.situacion.trim();
    if situacion.chars().count() < 6 {
        return format!("{} - Sesión {}°", details.campo, details.grado);
    }
    let short: Vec<&str> = situacion.split_whitespace().take(8).collect();
    format!("{} ({}°)", short.join(" "), details.grado)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
