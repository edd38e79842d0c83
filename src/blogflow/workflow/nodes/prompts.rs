// SPDX-License-Identifier: MIT

//! Prompt templates for the blog nodes

use super::route::Language;

pub fn title_prompt(topic: &str) -> String {
    format!(
        "You are an expert blog writer. Use the topic \"{topic}\" to create an engaging blog title.\n\
         Use Markdown formatting. The title should be creative and SEO friendly."
    )
}

pub fn content_prompt(topic: &str, title: &str) -> String {
    format!(
        "You are an expert blog writer. Use Markdown formatting.\n\
         Generate detailed blog content that resonates with the audience, with a detailed \
         breakdown of the topic \"{topic}\" under the title:\n\n{title}"
    )
}

pub fn translation_prompt(language: Language, content: &str) -> String {
    format!(
        "Translate the following content into {language}.\n\
         - Maintain the original tone, style, meaning, context and formatting.\n\
         - Adapt cultural references and idioms to be appropriate for a {language} audience.\n\n\
         ORIGINAL CONTENT:\n{content}"
    )
}
