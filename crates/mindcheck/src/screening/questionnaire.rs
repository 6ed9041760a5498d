use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of ordinal options offered by every question.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Closed set of scorable question identifiers, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Income,
    Education,
    Employment,
    Sleep,
    Appetite,
    Energy,
    Mood,
    Interest,
    Anxiety,
    Relationships,
    Support,
    Isolation,
}

impl QuestionId {
    pub const ALL: [QuestionId; 12] = [
        QuestionId::Income,
        QuestionId::Education,
        QuestionId::Employment,
        QuestionId::Sleep,
        QuestionId::Appetite,
        QuestionId::Energy,
        QuestionId::Mood,
        QuestionId::Interest,
        QuestionId::Anxiety,
        QuestionId::Relationships,
        QuestionId::Support,
        QuestionId::Isolation,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Education => "education",
            Self::Employment => "employment",
            Self::Sleep => "sleep",
            Self::Appetite => "appetite",
            Self::Energy => "energy",
            Self::Mood => "mood",
            Self::Interest => "interest",
            Self::Anxiety => "anxiety",
            Self::Relationships => "relationships",
            Self::Support => "support",
            Self::Isolation => "isolation",
        }
    }

    /// Position of the question in [`QuestionId::ALL`] and in the weight table rows.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn category(self) -> Category {
        match self {
            Self::Income | Self::Education | Self::Employment => Category::Socioeconomic,
            Self::Sleep | Self::Appetite | Self::Energy => Category::Behavioral,
            Self::Mood | Self::Interest | Self::Anxiety => Category::Psychological,
            Self::Relationships | Self::Support | Self::Isolation => Category::Social,
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = UnknownQuestion;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        QuestionId::ALL
            .into_iter()
            .find(|id| id.as_str() == raw)
            .ok_or_else(|| UnknownQuestion(raw.to_string()))
    }
}

/// Raised when a free-form identifier does not name one of the twelve questions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown question identifier '{0}'")]
pub struct UnknownQuestion(pub String);

/// Questionnaire sections, presented in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Socioeconomic,
    Behavioral,
    Psychological,
    Social,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Socioeconomic,
        Category::Behavioral,
        Category::Psychological,
        Category::Social,
    ];

    /// Section identifier shown in the form header.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Socioeconomic => "socioeconomica",
            Self::Behavioral => "conductual",
            Self::Psychological => "psicologica",
            Self::Social => "social",
        }
    }

    /// Axis label used by the per-category chart.
    pub const fn chart_label(self) -> &'static str {
        match self {
            Self::Socioeconomic => "Socioeconómico",
            Self::Behavioral => "Conductual",
            Self::Psychological => "Psicológico",
            Self::Social => "Social",
        }
    }

    pub fn questions(self) -> impl Iterator<Item = QuestionId> {
        QuestionId::ALL
            .into_iter()
            .filter(move |id| id.category() == self)
    }
}

/// A single multiple-choice prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub options: [&'static str; OPTIONS_PER_QUESTION],
}

/// One form section and the questions it presents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySection {
    pub category: Category,
    pub key: &'static str,
    pub questions: Vec<Question>,
}

/// The fixed catalog of sections and questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    sections: Vec<CategorySection>,
}

impl Questionnaire {
    pub fn standard() -> Self {
        let sections = Category::ALL
            .into_iter()
            .map(|category| CategorySection {
                category,
                key: category.key(),
                questions: category.questions().map(question).collect(),
            })
            .collect();

        Self { sections }
    }

    pub fn categories(&self) -> &[CategorySection] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&CategorySection> {
        self.sections.get(index)
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
            .find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

fn question(id: QuestionId) -> Question {
    let (prompt, options) = match id {
        QuestionId::Income => (
            "¿Cuál es su nivel de ingresos mensual?",
            [
                "Menos de $10,000",
                "$10,000 - $20,000",
                "$20,000 - $30,000",
                "Más de $30,000",
            ],
        ),
        QuestionId::Education => (
            "¿Cuál es su nivel de educación?",
            ["Primaria", "Secundaria", "Universidad", "Posgrado"],
        ),
        QuestionId::Employment => (
            "¿Cuál es su situación laboral actual?",
            [
                "Empleado tiempo completo",
                "Empleado medio tiempo",
                "Desempleado",
                "Estudiante",
            ],
        ),
        QuestionId::Sleep => (
            "¿Cómo describiría sus patrones de sueño?",
            [
                "Regular y suficiente",
                "Irregular",
                "Insomnio frecuente",
                "Duerme demasiado",
            ],
        ),
        QuestionId::Appetite => (
            "¿Cómo ha estado su apetito?",
            ["Normal", "Aumentado", "Disminuido", "Muy variable"],
        ),
        QuestionId::Energy => (
            "¿Cómo describiría su nivel de energía?",
            ["Alto", "Normal", "Bajo", "Muy bajo"],
        ),
        QuestionId::Mood => (
            "¿Cómo describiría su estado de ánimo general?",
            ["Positivo", "Neutral", "Variable", "Negativo"],
        ),
        QuestionId::Interest => (
            "¿Ha perdido interés en actividades que antes disfrutaba?",
            ["No", "Ocasionalmente", "Frecuentemente", "Siempre"],
        ),
        QuestionId::Anxiety => (
            "¿Con qué frecuencia se siente ansioso?",
            [
                "Raramente",
                "Ocasionalmente",
                "Frecuentemente",
                "Constantemente",
            ],
        ),
        QuestionId::Relationships => (
            "¿Cómo describiría sus relaciones sociales?",
            [
                "Muy satisfactorias",
                "Satisfactorias",
                "Regulares",
                "Insatisfactorias",
            ],
        ),
        QuestionId::Support => (
            "¿Cuenta con apoyo emocional de familiares o amigos?",
            ["Mucho apoyo", "Apoyo moderado", "Poco apoyo", "Sin apoyo"],
        ),
        QuestionId::Isolation => (
            "¿Con qué frecuencia se siente solo o aislado?",
            ["Raramente", "Ocasionalmente", "Frecuentemente", "Siempre"],
        ),
    };

    Question {
        id,
        prompt,
        options,
    }
}
