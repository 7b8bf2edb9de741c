//! Single-shot analysis prompts.
//!
//! Each operation is one fixed-choice prompt over a user-supplied string,
//! independent of any chat session. Replies are trimmed to a bare label or
//! a single reframed sentence.

use crate::client::GeminiClient;
use crate::error::GeminiError;

/// Classify the emotional state of a piece of text into one of the seven
/// taxonomy labels. Returns the trimmed label string.
pub async fn analyze_mood(client: &GeminiClient, text: &str) -> Result<String, GeminiError> {
    let prompt = format!(
        "Analyze the emotional state in this text. Categorize it as one of the following:\n\
         - Happy\n\
         - Sad\n\
         - Anxious\n\
         - Angry\n\
         - Neutral\n\
         - Stressed\n\
         - Depressed\n\n\
         Text: \"{text}\"\n\n\
         Return only the emotion category name."
    );

    let reply = client.generate_text(&prompt).await?;
    Ok(reply.trim().to_string())
}

/// Identify which cognitive distortion a negative thought most closely
/// represents. Returns the trimmed distortion name.
pub async fn analyze_cognitive_distortion(
    client: &GeminiClient,
    negative_thought: &str,
) -> Result<String, GeminiError> {
    let prompt = format!(
        "Analyze the following negative thought and identify which cognitive distortion it most closely represents from the following options:\n\
         1. Black and White Thinking: Seeing things in absolute, all-or-nothing categories.\n\
         2. Catastrophizing: Expecting the worst possible outcome.\n\
         3. Mind Reading: Assuming you know what others are thinking without evidence.\n\
         4. Emotional Reasoning: Assuming your feelings reflect reality.\n\n\
         Negative thought: \"{negative_thought}\"\n\n\
         Return ONLY the name of the cognitive distortion (e.g., \"Black and White Thinking\") without any other text or explanation."
    );

    let reply = client.generate_text(&prompt).await?;
    Ok(reply.trim().to_string())
}

/// Generate a balanced reframing of a negative thought, given the
/// distortion it exhibits.
pub async fn generate_reframed_thought(
    client: &GeminiClient,
    negative_thought: &str,
    distortion: &str,
) -> Result<String, GeminiError> {
    let prompt = format!(
        "You are a skilled cognitive behavioral therapist with expertise in thought reframing.\n\n\
         The user has provided the following negative thought:\n\
         \"{negative_thought}\"\n\n\
         The cognitive distortion identified is: {distortion}\n\n\
         Please generate a reframed version of this thought that is:\n\
         1. More balanced and realistic\n\
         2. Challenges the identified cognitive distortion\n\
         3. Supportive and compassionate, not toxic positivity\n\
         4. Specific to the original thought's context\n\n\
         Return only the reframed thought without any additional explanations, introductions, or comments."
    );

    let reply = client.generate_text(&prompt).await?;
    Ok(reply.trim().to_string())
}
