//! Prompt Template Set
//!
//! The fixed, parametrized prompt strings used by the generation pipeline.
//! Templates carry `{transcript}` and `{title}` placeholders that are filled
//! by [`render`]; nothing here validates the transcript content.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Introductory-paragraph summary prompt (pt-BR).
pub const SUMMARY_PROMPT_TEMPLATE: &str = "Por favor, leia a transcrição abaixo e escreva um único parágrafo curto (2-4 frases) que apresente de forma clara e concisa sobre o que trata o vídeo. O parágrafo deve ser informativo, em tom neutro, e servir como uma introdução explicativa para leitores que ainda não assistiram ao vídeo.

Transcrição:
{transcript}

Parágrafo introdutório:";

/// Key-topic extraction prompt. The bullet format is advisory: the pipeline
/// never parses the model's output structure.
pub const TOPICS_PROMPT_TEMPLATE: &str = "Você é um assistente especializado em extrair os principais tópicos abordados em vídeos do YouTube.

Analise a seguinte transcrição e identifique os 3-5 tópicos/temas MAIS IMPORTANTES discutidos no vídeo.

Para cada tópico, forneça:
1. Nome do tópico (curto e direto)
2. Breve descrição (1 linha explicando o que foi discutido)

Formato de saída (siga EXATAMENTE):
• Tópico 1: Descrição breve
• Tópico 2: Descrição breve
• Tópico 3: Descrição breve

---

TRANSCRIÇÃO DO VÍDEO:
{transcript}

---

TÓPICOS PRINCIPAIS:";

/// SEO-copywriter article prompt.
pub const ARTICLE_PROMPT_TEMPLATE: &str = "
Act as an expert copywriter specializing in content optimization for SEO. Your task is to take a given YouTube transcript and transform it into a well-structured and engaging article. Your objectives are as follows:

Content Transformation: Begin by thoroughly reading the provided YouTube transcript. Understand the main ideas, key points, and the overall message conveyed.

Sentence Structure: While rephrasing the content, pay careful attention to sentence structure. Ensure that the article flows logically and coherently.

Keyword Identification: Identify the main keyword or phrase from the transcript. It's crucial to determine the primary topic that the YouTube video discusses.

Keyword Integration: Incorporate the identified keyword naturally throughout the article. Use it in headings, subheadings, and within the body text. However, avoid overuse or keyword stuffing, as this can negatively affect SEO.

Unique Content: Your goal is to make the article 100% unique. Avoid copying sentences directly from the transcript. Rewrite the content in your own words while retaining the original message and meaning.

SEO Friendliness: Craft the article with SEO best practices in mind. This includes optimizing meta tags (title and meta description), using header tags appropriately, and maintaining an appropriate keyword density.

Engaging and Informative: Ensure that the article is engaging and informative for the reader. It should provide value and insight on the topic discussed in the YouTube video.

Proofreading: Proofread the article for grammar, spelling, and punctuation errors. Ensure it is free of any mistakes that could detract from its quality.

By following these guidelines, create a well-optimized, unique, and informative article that would rank well in search engine results and engage readers effectively.

Transcript:{transcript}";

/// Built-in article template used when the caller supplies none.
pub const DEFAULT_ARTICLE_PROMPT_TEMPLATE: &str = "Escreva um artigo bem estruturado com base na transcrição abaixo. Inclua uma introdução, subtítulos quando apropriado e uma conclusão. Use um tom informativo e claro.\n\nTranscrição:\n{transcript}\n\n";

/// Fill a template's `{transcript}` and `{title}` placeholders.
pub fn render(template: &str, transcript: &str, title: &str) -> String {
    template
        .replace("{transcript}", transcript)
        .replace("{title}", title)
}

/// Requested article extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ArticleLength {
    /// Fixed hint string prepended to the article prompt.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Short => "Escreva um artigo curto, aproximando-se de 150-300 palavras.",
            Self::Medium => "Escreva um artigo de média extensão, aproximando-se de 400-700 palavras.",
            Self::Long => "Escreva um artigo longo e detalhado, aproximando-se de 800-1200 palavras.",
        }
    }
}

impl std::fmt::Display for ArticleLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Short => f.write_str("short"),
            Self::Medium => f.write_str("medium"),
            Self::Long => f.write_str("long"),
        }
    }
}

impl FromStr for ArticleLength {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(format!(
                "Invalid length '{}'. Valid values: short, medium, long",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_placeholders() {
        assert_eq!(render("{transcript}!", "T", ""), "T!");
        assert_eq!(
            render("'{title}': {transcript}", "body", "Head"),
            "'Head': body"
        );
    }

    #[test]
    fn test_render_leaves_plain_text_untouched() {
        assert_eq!(render("no placeholders", "T", "X"), "no placeholders");
    }

    #[test]
    fn test_length_hints_are_distinct() {
        let hints = [
            ArticleLength::Short.hint(),
            ArticleLength::Medium.hint(),
            ArticleLength::Long.hint(),
        ];
        assert_ne!(hints[0], hints[1]);
        assert_ne!(hints[1], hints[2]);
        assert_ne!(hints[0], hints[2]);
        assert!(hints[0].contains("150-300"));
        assert!(hints[1].contains("400-700"));
        assert!(hints[2].contains("800-1200"));
    }

    #[test]
    fn test_length_parse_defaults_and_errors() {
        assert_eq!("short".parse::<ArticleLength>().unwrap(), ArticleLength::Short);
        assert_eq!("LONG".parse::<ArticleLength>().unwrap(), ArticleLength::Long);
        assert_eq!(ArticleLength::default(), ArticleLength::Medium);
        assert!("tiny".parse::<ArticleLength>().is_err());
    }

    #[test]
    fn test_templates_carry_transcript_placeholder() {
        for template in [
            SUMMARY_PROMPT_TEMPLATE,
            TOPICS_PROMPT_TEMPLATE,
            ARTICLE_PROMPT_TEMPLATE,
            DEFAULT_ARTICLE_PROMPT_TEMPLATE,
        ] {
            assert!(template.contains("{transcript}"));
        }
    }
}
