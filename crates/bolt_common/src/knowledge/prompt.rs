//! System instruction for the online assistant
//!
//! The online backend is primed with a persona prompt followed by the full
//! knowledge base, one `- **topic:** information` line per entry.

use super::schema::KnowledgeEntry;

/// Persona and answering rules, followed by the knowledge base listing
pub const BASE_SYSTEM_INSTRUCTION: &str = r#"You are a helpful and friendly humanoid robot assistant for a school. Your name is Bolt. You are designed to assist students, staff, and visitors. Use the following knowledge base to answer questions accurately. Be concise, friendly, and speak clearly.

**Instructions:**
- Only use the information provided in the knowledge base below to answer questions.
- If the answer is not in the knowledge base, you MUST respond with: "I'm afraid I cannot answer that. Please refer to the handbook or school website." Do not make up answers.
- If you cannot understand a question due to accents, a different language, or unclear speech, politely ask the user to repeat themselves or rephrase. For example, say "I'm sorry, I didn't quite get that. Could you please say it again?".

**Knowledge Base:**"#;

/// Render one entry as a markdown bullet
pub fn knowledge_line(entry: &KnowledgeEntry) -> String {
    format!("- **{}:** {}", entry.topic, entry.information)
}

/// Full system instruction for the given entries
pub fn system_instruction(entries: &[KnowledgeEntry]) -> String {
    let listing = entries
        .iter()
        .map(knowledge_line)
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n{}", BASE_SYSTEM_INSTRUCTION, listing)
}
