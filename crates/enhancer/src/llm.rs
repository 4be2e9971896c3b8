use allenatore_domain::{
    DnaSummary, EnhancementError, ExerciseInstance, GeneratedProgram, ProgramEnhancer, Property,
    Suggestion,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::EnhancerConfig;

const SYSTEM_PROMPT: &str = "You are a strength coach reviewing a training program. \
Suggest replacements only for exercises listed with an id, keep the movement pattern \
and prefer exercises that match the trainer's style. Answer with JSON only: \
{\"suggestions\": [{\"week\": null, \"day\": \"day_1\", \"replace\": \"<id>\", \
\"with\": \"<id>\", \"reason\": \"...\"}]}. Use an empty list if the program is fine.";

/// Program enhancer backed by an OpenAI-compatible chat completions API.
pub struct LlmEnhancer {
    http: reqwest::Client,
    config: EnhancerConfig,
}

impl LlmEnhancer {
    pub fn new(config: EnhancerConfig) -> Result<Self, EnhancementError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| EnhancementError::Transport(err.to_string()))?;
        Ok(Self { http, config })
    }

    async fn complete(&self, prompt: String) -> Result<String, EnhancementError> {
        let body = ChatRequest {
            model: &self.config.model,
            temperature: 0.2,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
        };
        let mut request = self.http.post(self.config.completions_url()).json(&body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                EnhancementError::Timeout
            } else {
                EnhancementError::Transport(err.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnhancementError::Transport(format!(
                "enhancer returned status {status}"
            )));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|err| EnhancementError::InvalidResponse(err.to_string()))?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| EnhancementError::InvalidResponse("no choices".to_string()))
    }
}

impl ProgramEnhancer for LlmEnhancer {
    async fn suggest(
        &self,
        program: &GeneratedProgram,
        dna: Option<&DnaSummary>,
    ) -> Result<Vec<Suggestion>, EnhancementError> {
        let prompt = serde_json::to_string(&Digest::new(program, dna))
            .map_err(|err| EnhancementError::InvalidResponse(err.to_string()))?;
        debug!("requesting suggestions from {}", self.config.model);
        let content = tokio::time::timeout(self.config.timeout, self.complete(prompt))
            .await
            .map_err(|_| EnhancementError::Timeout)??;
        let suggestions = parse_suggestions(&content)?;
        debug!("received {} suggestions", suggestions.len());
        Ok(suggestions)
    }
}

/// Extracts suggestions from a model answer, tolerating a Markdown code fence
/// around the JSON object. Entries with an empty exercise id are dropped.
pub fn parse_suggestions(content: &str) -> Result<Vec<Suggestion>, EnhancementError> {
    let content = strip_fence(content);
    let answer: Answer = serde_json::from_str(content)
        .map_err(|err| EnhancementError::InvalidResponse(err.to_string()))?;
    Ok(answer
        .suggestions
        .into_iter()
        .filter_map(|s| {
            if s.replace.trim().is_empty() || s.with.trim().is_empty() {
                warn!("dropping incomplete suggestion for {}", s.day);
                return None;
            }
            Some(Suggestion {
                week: s.week,
                day: s.day.trim().into(),
                replace: s.replace.trim().into(),
                with: s.with.trim().into(),
                reason: s.reason,
            })
        })
        .collect())
}

fn strip_fence(content: &str) -> &str {
    let content = content.trim();
    let Some(inner) = content.strip_prefix("```") else {
        return content;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct Answer {
    #[serde(default)]
    suggestions: Vec<AnswerSuggestion>,
}

#[derive(Deserialize)]
struct AnswerSuggestion {
    #[serde(default)]
    week: Option<u32>,
    day: String,
    replace: String,
    with: String,
    #[serde(default)]
    reason: String,
}

/// Compact view of the first week sent to the model.
#[derive(Serialize, Debug, PartialEq)]
struct Digest<'a> {
    goal: &'static str,
    level: &'static str,
    split: &'a str,
    sessions: Vec<DigestSession<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<DigestStyle<'a>>,
}

#[derive(Serialize, Debug, PartialEq)]
struct DigestSession<'a> {
    day: &'a str,
    name: &'a str,
    exercises: Vec<DigestExercise<'a>>,
}

#[derive(Serialize, Debug, PartialEq)]
struct DigestExercise<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    name: &'a str,
    pattern: &'static str,
    role: &'static str,
}

#[derive(Serialize, Debug, PartialEq)]
struct DigestStyle<'a> {
    preferred_exercises: &'a [String],
    preferred_sets: Option<u32>,
    accessory_philosophy: &'static str,
}

impl<'a> Digest<'a> {
    fn new(program: &'a GeneratedProgram, dna: Option<&'a DnaSummary>) -> Self {
        let sessions = program
            .weeks
            .first()
            .map(|week| {
                week.sessions
                    .iter()
                    .map(|session| DigestSession {
                        day: &session.day,
                        name: &session.name,
                        exercises: session.exercises.iter().map(DigestExercise::new).collect(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            goal: program.goal.key(),
            level: program.level.key(),
            split: &program.periodization.split,
            sessions,
            style: dna.map(|dna| DigestStyle {
                preferred_exercises: &dna.preferred_exercises,
                preferred_sets: dna.preferred_sets,
                accessory_philosophy: dna.accessory_philosophy.key(),
            }),
        }
    }
}

impl<'a> DigestExercise<'a> {
    fn new(exercise: &'a ExerciseInstance) -> Self {
        // Only catalog entries may be replaced.
        let id = match exercise {
            ExerciseInstance::Catalog(instance) => Some(instance.exercise_id.as_str()),
            _ => None,
        };
        Self {
            id,
            name: exercise.name(),
            pattern: exercise.pattern().key(),
            role: exercise.role().key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use allenatore_domain::{
        ClientContext, Difficulty, ExerciseCatalog, GenerationParameters, Goal, ProgramAssembler,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn program() -> GeneratedProgram {
        let catalog = ExerciseCatalog::seeded();
        ProgramAssembler::new(&catalog)
            .assemble(
                &ClientContext::new(Goal::Strength, Difficulty::Intermediate),
                &GenerationParameters {
                    weeks: 4,
                    sessions_per_week: 2,
                    ..GenerationParameters::default()
                },
                None,
            )
            .unwrap()
    }

    fn enhancer(base_url: String, timeout: Duration) -> LlmEnhancer {
        LlmEnhancer::new(EnhancerConfig {
            base_url,
            timeout,
            ..EnhancerConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_parse_suggestions() {
        let content = r#"```json
{"suggestions": [
  {"week": 2, "day": "day_1", "replace": "back_squat", "with": "front_squat", "reason": "variety"},
  {"day": "day_2", "replace": " ", "with": "goblet_squat"}
]}
```"#;
        assert_eq!(
            parse_suggestions(content).unwrap(),
            vec![Suggestion {
                week: Some(2),
                day: "day_1".into(),
                replace: "back_squat".into(),
                with: "front_squat".into(),
                reason: "variety".to_string(),
            }]
        );
    }

    #[rstest]
    #[case("{}")]
    #[case("{\"suggestions\": []}")]
    #[case("```\n{\"suggestions\": []}\n```")]
    fn test_parse_suggestions_empty(#[case] content: &str) {
        assert_eq!(parse_suggestions(content).unwrap(), vec![]);
    }

    #[rstest]
    #[case("")]
    #[case("The program looks fine.")]
    #[case("{\"suggestions\": [{\"day\": \"day_1\"}]}")]
    fn test_parse_suggestions_invalid(#[case] content: &str) {
        assert!(matches!(
            parse_suggestions(content),
            Err(EnhancementError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_digest() {
        let program = program();
        let digest = Digest::new(&program, None);
        assert_eq!(digest.goal, "strength");
        assert_eq!(digest.sessions.len(), 2);
        assert_eq!(digest.sessions[0].day, "day_1");
        assert!(digest.style.is_none());
        assert!(
            digest
                .sessions
                .iter()
                .flat_map(|s| &s.exercises)
                .all(|e| e.id.is_some())
        );
    }

    #[tokio::test]
    async fn test_suggest_timeout() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        let enhancer = enhancer(format!("http://{address}/v1"), Duration::from_millis(50));
        assert_eq!(
            enhancer.suggest(&program(), None).await,
            Err(EnhancementError::Timeout)
        );
        drop(listener);
    }

    #[tokio::test]
    async fn test_suggest_unreachable() {
        let address = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let enhancer = enhancer(format!("http://{address}/v1"), Duration::from_secs(5));
        assert!(matches!(
            enhancer.suggest(&program(), None).await,
            Err(EnhancementError::Transport(_))
        ));
    }
}
