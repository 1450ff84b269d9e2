// src/prompt.rs
//! Builds the generation request sent to the editor model. Pure function of
//! (digest, date): same input, byte-identical prompt.

use crate::edition::EditionDate;
use crate::ingest::types::Digest;

/// Visual skeleton of the newsletter, kept as a data asset so layout changes
/// never touch pipeline code. The builder only fills in the date.
const TEMPLATE: &str = include_str!("../assets/newsletter_template.html");
const DATE_PLACEHOLDER: &str = "{{DATA}}";

pub fn build_prompt(digest: &Digest, date: &EditionDate) -> String {
    let digest_json = serde_json::to_string_pretty(&digest.categories)
        .unwrap_or_else(|_| "[]".to_string());
    let template = TEMPLATE.replace(DATE_PLACEHOLDER, &date.label);
    let label = &date.label;

    format!(
        r#"Você é o editor da newsletter "MÍDIA GROSSA" — uma newsletter brasileira com identidade visual de jornal tabloide, linguagem direta e moderna, com ênfase em futebol carioca.

Hoje é {label}.

Você recebeu as seguintes notícias coletadas de feeds RSS:

{digest_json}

Sua tarefa: gerar uma página HTML COMPLETA e AUTOSSUFICIENTE da newsletter do dia.

REGRAS OBRIGATÓRIAS:
1. Use EXATAMENTE o mesmo HTML/CSS da newsletter modelo abaixo como base visual (mesmas fontes, cores, layout)
2. Selecione as 2-3 notícias mais relevantes de cada categoria
3. Reescreva os textos com linguagem jornalística brasileira — direto, sem enrolação
4. Para esportes, priorize futebol carioca (Flamengo, Fluminense, Vasco, Botafogo), depois futebol nacional, depois outros esportes
5. Para pop/internet, escolha o que seria mais "cronicamente online" e viral
6. Gere números fictícios plausíveis para o bloco de mercado SE não houver dados suficientes
7. Atualize o ticker "URGENTE" com os 3-4 fatos mais quentes do dia
8. O HTML deve ser 100% funcional standalone, com todas as fontes e estilos inline/embedded
9. Retorne APENAS o HTML, sem markdown, sem explicações, sem ```html

MODELO VISUAL (use exatamente este CSS/estrutura):

{template}

Agora gere a newsletter COMPLETA de {label} com as notícias fornecidas. Retorne APENAS o HTML final."#
    )
}
