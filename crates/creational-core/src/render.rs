//! Colored console output shared by the scripted commands and the menus

use crate::explanation::PatternExplanation;
use colored::Colorize;

const RULE: &str = "------------------------------------------";

/// Green check line
pub fn success(message: &str) {
    println!("{} {}", "✔".green(), message.green());
}

/// Cyan informational line
pub fn info(message: &str) {
    println!("{}", message.cyan());
}

/// Red failure line on stderr
pub fn failure(message: &str) {
    eprintln!("{} {}", "✖".red(), message.red());
}

/// Bold `=== TITLE ===` banner
pub fn heading(title: &str) {
    println!();
    println!("{}", format!("=== {} ===", title.to_uppercase()).cyan().bold());
    println!();
}

/// Full walkthrough text, with colored section headings
pub fn format_explanation(explanation: &PatternExplanation) -> String {
    let mut out = String::new();
    out.push_str(
        &format!("=== {} ===", explanation.title.to_uppercase())
            .cyan()
            .bold()
            .to_string(),
    );
    out.push('\n');

    for (heading, body) in explanation.sections() {
        out.push('\n');
        out.push_str(&heading.green().bold().to_string());
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
        out.push_str(body);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!("Reference: {}", explanation.docs_url).dimmed().to_string());
    out
}

pub fn print_explanation(explanation: &PatternExplanation) {
    println!();
    println!("{}", format_explanation(explanation));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explanation::Pattern;

    #[test]
    fn test_explanation_lists_sections_in_order() {
        let explanation = PatternExplanation::for_pattern(Pattern::Builder).unwrap();
        let text = format_explanation(&explanation);

        let positions: Vec<usize> = explanation
            .sections()
            .iter()
            .map(|(heading, _)| text.find(heading).expect("heading present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("BUILDER PATTERN"));
        assert!(text.contains(&explanation.docs_url));
    }
}
