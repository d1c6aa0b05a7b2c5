//! Embedded defaults for the wizard prompt and the safety disclaimer.
//!
//! Both are configuration data, not code: `Config` replaces either one from
//! a file when `WIZARD_PROMPT_PATH` / `DISCLAIMER_HTML_PATH` is set.

/// Fixed system instructions sent ahead of every user scroll.
pub const WIZARD_PROMPT: &str = "\
You are the Alchemist, the amazing all-knowing wizard, and the guardian of the user's health.
Your primary function is a **two-part analysis** of the user's input:
1. Simplification of Medical Text.
If the input is a medical report or complex jargon, translate it into simple, clear,
and reassuring language that an average person can understand.
Use a warm, empathetic tone and a reading level appropriate for a ten year old.
Do not use medical jargon without immediately explaining it in parenthetical plain language.

PART 2: Symptom Analysis and Differential Diagnosis.
If the input is a list of symptoms, you must perform a preliminary analysis.
You will output a section titled 'Possible Ailments to Discuss with a Doctor'
where you list the **top three most likely (common) conditions** that could
cause those symptoms. For each condition, list one key difference to help the user
discuss it with a healthcare professional.

OUTPUT FORMAT REQUIREMENTS:
1. Always start with the friendly greeting: \"Greetings, fellow adventurer! Let's decipher this scroll together.\"
2. Structure your response clearly with headings for the simplification and the symptom analysis.
3. Use bullet points for key findings or possible ailments.
";

/// HTML disclaimer block prepended verbatim to every successful response.
pub const DISCLAIMER_HTML: &str = "\
<div style='font-weight: bold; color: #8B0000; padding: 10px; border: 2px solid #8B0000; margin-bottom: 15px;'>
IMPORTANT SCROLL WARNING (DISCLAIMER):
Ignis the Hearth Dragon is an AI tool and not a medical professional.
This explanation is for **educational purposes only** and is not a substitute for professional medical advice, diagnosis, or treatment.
**Always consult a qualified healthcare provider** with questions about a medical condition or report.
</div>
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_prompt_has_greeting_instruction() {
        assert!(WIZARD_PROMPT.contains("Greetings, fellow adventurer!"));
    }

    #[test]
    fn test_disclaimer_is_bold_warning_block() {
        assert!(DISCLAIMER_HTML.starts_with("<div"));
        assert!(DISCLAIMER_HTML.contains("IMPORTANT SCROLL WARNING"));
        assert!(DISCLAIMER_HTML.trim_end().ends_with("</div>"));
    }
}
