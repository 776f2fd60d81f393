//! Static MINEDU mathematics curriculum table for primary grades 1 through 6.
//!
//! This is reference data, not configuration: it changes when the national
//! curriculum does, so it ships with the binary.

use serde::Serialize;

/// Learning objectives for one grade: the competency, its capacities, and the
/// expected performances.
#[derive(Debug, Clone, Serialize)]
pub struct GradeEntry {
    pub competencia: &'static str,
    pub capacidades: &'static [&'static str],
    pub desempenos: &'static [&'static str],
}

static GRADE_1: GradeEntry = GradeEntry {
    competencia: "Resuelve problemas de cantidad y desarrolla sentido numérico",
    capacidades: &[
        "Comprende el número como cantidad y utiliza operaciones básicas (adición/sustracción)",
        "Representa situaciones con dibujos y conteos",
        "Comunica procedimientos y resultados sencillos",
    ],
    desempenos: &[
        "Resuelve problemas sencillos de adición y sustracción",
        "Explica el proceso de conteo usado",
    ],
};

static GRADE_2: GradeEntry = GradeEntry {
    competencia: "Resuelve problemas de cantidad usando estrategias personales",
    capacidades: &[
        "Relaciona el número con la cantidad",
        "Utiliza adición y sustracción hasta 100",
    ],
    desempenos: &["Resuelve problemas con explicación de la estrategia"],
};

static GRADE_3: GradeEntry = GradeEntry {
    competencia: "Resuelve problemas de cantidad y magnitud",
    capacidades: &["Aplica multiplicación y división en contextos reales"],
    desempenos: &["Modela situaciones mediante multiplicación"],
};

static GRADE_4: GradeEntry = GradeEntry {
    competencia: "Resuelve problemas con operaciones combinadas",
    capacidades: &["Aplica propiedades de operaciones", "Estima resultados"],
    desempenos: &["Resuelve problemas con dos pasos"],
};

static GRADE_5: GradeEntry = GradeEntry {
    competencia: "Resuelve problemas de proporción y porcentaje",
    capacidades: &["Opera con fracciones y decimales", "Calcula porcentajes"],
    desempenos: &["Aplica porcentajes en contexto"],
};

static GRADE_6: GradeEntry = GradeEntry {
    competencia: "Resuelve problemas con pensamiento algebraico inicial",
    capacidades: &[
        "Modela relaciones con expresiones",
        "Resuelve ecuaciones simples",
    ],
    desempenos: &["Interpreta y aplica ecuaciones sencillas"],
};

/// Used when the grade is unknown or unspecified; the document still renders.
static GENERIC: GradeEntry = GradeEntry {
    competencia: "Competencia genérica",
    capacidades: &["Capacidad 1"],
    desempenos: &["Desempeño 1"],
};

/// Looks up the curriculum entry for a grade token (`"1"` through `"6"`).
pub fn for_grade(grado: &str) -> Option<&'static GradeEntry> {
    match grado.trim() {
        "1" => Some(&GRADE_1),
        "2" => Some(&GRADE_2),
        "3" => Some(&GRADE_3),
        "4" => Some(&GRADE_4),
        "5" => Some(&GRADE_5),
        "6" => Some(&GRADE_6),
        _ => None,
    }
}

/// Entry for a grade, falling back to the generic one for unknown grades.
pub fn for_grade_or_generic(grado: &str) -> &'static GradeEntry {
    for_grade(grado).unwrap_or(&GENERIC)
}
