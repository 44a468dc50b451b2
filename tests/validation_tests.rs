use s2s_events::protocol::models::{
    AudioInputConfiguration, InferenceConfiguration, ToolConfiguration, ToolSpec,
};
use s2s_events::{ClientEvent, Defaults, Error, EventFactory, from_json, to_json};

fn invalid_argument(result: Result<String, Error>) -> String {
    match result {
        Err(Error::InvalidArgument(msg)) => msg,
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn to_json_accepts_default_events() {
    let factory = EventFactory::new();
    for event in [
        factory.session_start(),
        factory.prompt_start("p1"),
        factory.content_start_text("p1", "sys"),
        factory.system_prompt("p1", "sys"),
        factory.content_start_audio("p1", "mic"),
        factory.audio_input("p1", "mic", "aGVsbG8="),
        factory.content_start_tool("p1", "tool", "tool-1"),
        factory.text_input_tool("p1", "tool", "{}"),
        factory.content_end("p1", "sys"),
        factory.prompt_end("p1"),
        factory.session_end(),
    ] {
        to_json(&event).unwrap_or_else(|e| panic!("{} rejected: {e}", event.kind()));
    }
}

#[test]
fn empty_prompt_name_is_rejected() {
    let msg = invalid_argument(to_json(&ClientEvent::prompt_end("")));
    assert!(msg.contains("promptName"));
}

#[test]
fn blank_content_name_is_rejected() {
    let msg = invalid_argument(to_json(&ClientEvent::content_end("p1", "  ")));
    assert!(msg.contains("contentName"));
}

#[test]
fn empty_tool_use_id_is_rejected() {
    let msg = invalid_argument(to_json(&ClientEvent::content_start_tool("p1", "c1", "")));
    assert!(msg.contains("toolUseId"));
}

#[test]
fn invalid_base64_audio_is_rejected() {
    let msg = invalid_argument(to_json(&ClientEvent::audio_input("p1", "mic", "abc!")));
    assert!(msg.contains("base64"));

    let msg = invalid_argument(to_json(&ClientEvent::audio_input("p1", "mic", "")));
    assert!(msg.contains("must not be empty"));
}

#[test]
fn out_of_range_inference_is_rejected() {
    let config = InferenceConfiguration::default().with_top_p(1.5);
    let msg = invalid_argument(to_json(&ClientEvent::session_start(config)));
    assert!(msg.contains("topP"));
}

#[test]
fn zero_sample_rate_is_rejected() {
    let config = AudioInputConfiguration::lpcm(0, 1);
    assert!(matches!(
        to_json(&ClientEvent::content_start_audio("p1", "mic", config)),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn empty_voice_id_is_rejected() {
    let output = Defaults::default().audio_output_configuration.with_voice("");
    let event = ClientEvent::prompt_start("p1", output, ToolConfiguration::default());
    let msg = invalid_argument(to_json(&event));
    assert!(msg.contains("voiceId"));
}

#[test]
fn bad_tool_schema_is_rejected() {
    let tools = ToolConfiguration::from_specs([ToolSpec::new("broken", "d", "not json")]);
    let event = ClientEvent::prompt_start("p1", Defaults::default().audio_output_configuration, tools);
    let msg = invalid_argument(to_json(&event));
    assert!(msg.contains("broken"));
}

#[test]
fn misordered_events_still_validate() {
    // Shape checks never look at ordering.
    assert!(to_json(&ClientEvent::content_end("p1", "never-started")).is_ok());
}

#[test]
fn from_json_reports_malformed_input() {
    assert!(matches!(
        from_json(r#"{"event":{"bogus":{}}}"#),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn from_json_parses_encoded_event() {
    let event = EventFactory::new().prompt_start("p1");
    let json = to_json(&event).unwrap();
    assert_eq!(from_json(&json).unwrap(), event);
}

#[test]
fn defaults_from_json_overrides_selected_presets() {
    let defaults = Defaults::from_json(
        r#"{
            "inferenceConfiguration": { "maxTokens": 512, "topP": 0.9, "temperature": 0.2 },
            "systemPrompt": "Be brief."
        }"#,
    )
    .expect("defaults parse");

    assert_eq!(defaults.inference_configuration.max_tokens, 512);
    assert_eq!(defaults.system_prompt, "Be brief.");
    assert_eq!(defaults.audio_output_configuration.voice_id, "matthew");
    assert_eq!(defaults.tool_configuration.tools.len(), 2);
}

#[test]
fn defaults_from_json_validates_ranges() {
    let result = Defaults::from_json(
        r#"{ "inferenceConfiguration": { "maxTokens": 0, "topP": 0.9, "temperature": 0.2 } }"#,
    );
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}
