use serde::{Deserialize, Serialize};

use super::skills::detect_skills;

/// Consultant currently off engagement, to be marketed to hiring managers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConsultant {
    pub name: String,
    #[serde(alias = "tech_stack")]
    pub resume_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketOpportunity {
    pub title: &'static str,
    pub company: &'static str,
    #[serde(rename = "match")]
    pub match_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchPitch {
    pub consultant: String,
    pub tech_stack: Vec<String>,
    pub market_opportunities: Vec<MarketOpportunity>,
    pub auto_generated_email: String,
}

const OPEN_MARKET_ROLES: [MarketOpportunity; 2] = [
    MarketOpportunity {
        title: "Sr Java Lead",
        company: "TechFlow",
        match_label: "95%",
    },
    MarketOpportunity {
        title: "Java Backend Dev",
        company: "DataCorp",
        match_label: "88%",
    },
];

/// Build the outreach pitch for a bench consultant. Pure formatting over the inputs.
pub fn market_bench(consultant: &BenchConsultant) -> BenchPitch {
    let name = consultant.name.trim();
    let tech_stack: Vec<String> = detect_skills(&consultant.resume_text).into_iter().collect();

    BenchPitch {
        consultant: name.to_string(),
        market_opportunities: OPEN_MARKET_ROLES.to_vec(),
        auto_generated_email: pitch_email(name, &tech_stack),
        tech_stack,
    }
}

fn pitch_email(name: &str, tech_stack: &[String]) -> String {
    let experience = match tech_stack {
        [] => String::new(),
        [only] => format!(" with hands-on {only} experience"),
        [init @ .., last] => format!(" with hands-on {} and {last} experience", init.join(", ")),
    };

    format!(
        "Hi Hiring Manager, I have a consultant {name}{experience} who is a strong fit for your role. They have 10+ years exp. Attached is the resume."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_names_consultant_and_stack() {
        let pitch = market_bench(&BenchConsultant {
            name: " Priya N ".to_string(),
            resume_text: "Built Spring Boot services on AWS".to_string(),
        });

        assert_eq!(pitch.consultant, "Priya N");
        assert_eq!(pitch.tech_stack, vec!["AWS", "Spring Boot"]);
        assert_eq!(pitch.market_opportunities.len(), 2);
        assert_eq!(
            pitch.auto_generated_email,
            "Hi Hiring Manager, I have a consultant Priya N with hands-on AWS and Spring Boot experience who is a strong fit for your role. They have 10+ years exp. Attached is the resume."
        );
    }

    #[test]
    fn pitch_without_recognized_stack() {
        let pitch = market_bench(&BenchConsultant {
            name: "Sam".to_string(),
            resume_text: "Generalist".to_string(),
        });
        assert!(pitch.tech_stack.is_empty());
        assert!(pitch
            .auto_generated_email
            .starts_with("Hi Hiring Manager, I have a consultant Sam who is"));
    }

    #[test]
    fn accepts_tech_stack_alias() {
        let consultant: BenchConsultant =
            serde_json::from_str(r#"{"name":"Lee","tech_stack":"Rust, Kafka, Python"}"#)
                .expect("alias parses");
        let pitch = market_bench(&consultant);
        assert!(pitch
            .auto_generated_email
            .contains("with hands-on Kafka, Python and Rust experience"));
    }

    #[test]
    fn opportunities_serialize_match_field() {
        let json = serde_json::to_value(&OPEN_MARKET_ROLES[0]).expect("serializes");
        assert_eq!(json["match"], "95%");
    }
}
