use std::collections::BTreeSet;

/// Canonical skill names paired with the lowercase phrases that signal them.
const SKILL_VOCABULARY: &[(&str, &[&str])] = &[
    ("Java", &["java"]),
    ("Spring Boot", &["spring boot", "springboot", "spring"]),
    ("AWS", &["aws", "amazon web services"]),
    ("Azure", &["azure"]),
    ("GCP", &["gcp", "google cloud"]),
    ("Python", &["python"]),
    ("Rust", &["rust"]),
    ("Go", &["golang"]),
    ("JavaScript", &["javascript"]),
    ("TypeScript", &["typescript"]),
    ("React", &["react", "reactjs"]),
    ("Node.js", &["node.js", "nodejs", "node"]),
    ("SQL", &["sql", "postgres", "postgresql", "mysql"]),
    ("Kubernetes", &["kubernetes", "k8s"]),
    ("Docker", &["docker"]),
    ("Kafka", &["kafka"]),
    ("Microservices", &["microservices", "microservice"]),
];

const DEFAULT_SKILLS: [&str; 3] = ["Java", "AWS", "Spring Boot"];

/// Keyword pass over free text. Phrases must match whole tokens, so "javascript" does not
/// also yield "Java".
pub fn detect_skills(text: &str) -> BTreeSet<String> {
    let tokens = tokenize(text);

    SKILL_VOCABULARY
        .iter()
        .filter(|(_, phrases)| {
            phrases
                .iter()
                .any(|phrase| contains_phrase(&tokens, phrase))
        })
        .map(|(canonical, _)| canonical.to_string())
        .collect()
}

/// Skills for a provider query. Falls back to the default stack so the query is never empty.
pub fn extract_skills(description: &str) -> BTreeSet<String> {
    let detected = detect_skills(description);
    if detected.is_empty() {
        DEFAULT_SKILLS.iter().map(|skill| skill.to_string()).collect()
    } else {
        detected
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '.' || c == '+' || c == '#'))
        .map(|token| token.trim_end_matches('.'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn contains_phrase(tokens: &[String], phrase: &str) -> bool {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.is_empty() || words.len() > tokens.len() {
        return false;
    }

    tokens
        .windows(words.len())
        .any(|window| window.iter().zip(&words).all(|(token, word)| token.as_str() == *word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn detects_multi_word_and_aliases() {
        let skills = detect_skills("Senior Java engineer: Spring Boot, Amazon Web Services, k8s.");
        assert_eq!(skills, set(&["AWS", "Java", "Kubernetes", "Spring Boot"]));
    }

    #[test]
    fn whole_tokens_only() {
        let skills = detect_skills("JavaScript and TypeScript front end");
        assert_eq!(skills, set(&["JavaScript", "TypeScript"]));
    }

    #[test]
    fn trailing_period_does_not_hide_skill() {
        let skills = detect_skills("Must know Node.js. Also Python.");
        assert_eq!(skills, set(&["Node.js", "Python"]));
    }

    #[test]
    fn empty_description_uses_default_stack() {
        assert_eq!(
            extract_skills("Looking for a great teammate"),
            set(&["AWS", "Java", "Spring Boot"])
        );
    }
}
