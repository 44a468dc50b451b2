use s2s_events::protocol::client_events::{ClientEvent, Event};
use s2s_events::protocol::models::{
    AudioEncoding, AudioInputConfiguration, AudioType, ContentKind, MediaType, Role,
    DEFAULT_SYSTEM_PROMPT,
};
use s2s_events::EventFactory;
use serde_json::{Value, json};

fn to_value(event: &ClientEvent) -> Value {
    serde_json::to_value(event).expect("event serializes")
}

fn payload<'a>(value: &'a Value, kind: &str) -> &'a Value {
    let event = value["event"].as_object().expect("event object");
    assert_eq!(event.len(), 1, "exactly one child key under event");
    event.get(kind).unwrap_or_else(|| panic!("missing {kind}"))
}

#[test]
fn test_session_start_defaults() {
    let event = EventFactory::new().session_start();
    assert_eq!(
        to_value(&event),
        json!({
            "event": {
                "sessionStart": {
                    "inferenceConfiguration": {
                        "maxTokens": 2048,
                        "topP": 0.95,
                        "temperature": 0.7
                    }
                }
            }
        })
    );
}

#[test]
fn test_prompt_start_defaults() {
    let event = EventFactory::new().prompt_start("p1");
    assert_eq!(
        to_value(&event),
        json!({
            "event": {
                "promptStart": {
                    "promptName": "p1",
                    "textOutputConfiguration": { "mediaType": "text/plain" },
                    "audioOutputConfiguration": {
                        "mediaType": "audio/lpcm",
                        "sampleRateHertz": 24000,
                        "sampleSizeBits": 16,
                        "channelCount": 1,
                        "voiceId": "matthew",
                        "encoding": "base64",
                        "audioType": "SPEECH"
                    },
                    "toolUseOutputConfiguration": { "mediaType": "application/json" },
                    "toolConfiguration": {
                        "tools": [
                            {
                                "toolSpec": {
                                    "name": "getDateTool",
                                    "description": "get information about the current date and time",
                                    "inputSchema": {
                                        "json": "{\"type\":\"object\",\"properties\":{},\"required\":[]}"
                                    }
                                }
                            },
                            {
                                "toolSpec": {
                                    "name": "getTurbineSolarInfo",
                                    "description": s2s_events::protocol::models::defaults::TURBINE_SOLAR_TOOL_DESCRIPTION,
                                    "inputSchema": {
                                        "json": "{\"type\":\"object\",\"properties\":{\"query\":{\"type\":\"string\",\"description\":\"the query to be answered by the Turbine Solar Agent\"}},\"required\":[\"query\"]}"
                                    }
                                }
                            }
                        ]
                    }
                }
            }
        })
    );
}

#[test]
fn test_domain_tool_schema_is_a_json_string() {
    let value = to_value(&EventFactory::new().prompt_start("p1"));
    let tools = payload(&value, "promptStart")["toolConfiguration"]["tools"]
        .as_array()
        .expect("tools array");
    let schema = &tools[1]["toolSpec"]["inputSchema"]["json"];
    assert!(schema.is_string());

    let parsed: Value = serde_json::from_str(schema.as_str().unwrap()).expect("schema parses");
    assert_eq!(parsed["type"], "object");
    assert_eq!(parsed["properties"]["query"]["type"], "string");
    assert_eq!(parsed["required"], json!(["query"]));
}

#[test]
fn test_content_start_text_defaults_to_system() {
    let event = EventFactory::new().content_start_text("p1", "sys");
    assert_eq!(
        to_value(&event),
        json!({
            "event": {
                "contentStart": {
                    "promptName": "p1",
                    "contentName": "sys",
                    "type": "TEXT",
                    "interactive": true,
                    "role": "SYSTEM",
                    "textInputConfiguration": { "mediaType": "text/plain" }
                }
            }
        })
    );
}

#[test]
fn test_text_input_defaults_to_system_prompt() {
    let value = to_value(&EventFactory::new().system_prompt("p1", "sys"));
    assert_eq!(
        value,
        json!({
            "event": {
                "textInput": {
                    "promptName": "p1",
                    "contentName": "sys",
                    "content": DEFAULT_SYSTEM_PROMPT
                }
            }
        })
    );
}

#[test]
fn test_content_start_audio_defaults() {
    let event = EventFactory::new().content_start_audio("p1", "mic");
    assert_eq!(
        to_value(&event),
        json!({
            "event": {
                "contentStart": {
                    "promptName": "p1",
                    "contentName": "mic",
                    "type": "AUDIO",
                    "interactive": true,
                    "role": "USER",
                    "audioInputConfiguration": {
                        "mediaType": "audio/lpcm",
                        "sampleRateHertz": 16000,
                        "sampleSizeBits": 16,
                        "channelCount": 1,
                        "audioType": "SPEECH",
                        "encoding": "base64"
                    }
                }
            }
        })
    );
}

#[test]
fn test_custom_audio_input_configuration_is_reproduced() {
    let config = AudioInputConfiguration {
        media_type: MediaType::AudioLpcm,
        sample_rate_hertz: 8000,
        sample_size_bits: 8,
        channel_count: 2,
        audio_type: AudioType::Speech,
        encoding: AudioEncoding::Base64,
    };
    let event = ClientEvent::content_start_audio("p1", "mic", config);

    let value = to_value(&event);
    assert_eq!(
        payload(&value, "contentStart")["audioInputConfiguration"],
        json!({
            "mediaType": "audio/lpcm",
            "sampleRateHertz": 8000,
            "sampleSizeBits": 8,
            "channelCount": 2,
            "audioType": "SPEECH",
            "encoding": "base64"
        })
    );

    match event.event {
        Event::ContentStart(start) => match start.kind {
            ContentKind::Audio {
                audio_input_configuration,
                ..
            } => assert_eq!(audio_input_configuration, config),
            other => panic!("unexpected kind: {other:?}"),
        },
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn test_audio_input_shape() {
    let event = ClientEvent::audio_input("p1", "mic", "AAAA");
    assert_eq!(
        to_value(&event),
        json!({
            "event": {
                "audioInput": { "promptName": "p1", "contentName": "mic", "content": "AAAA" }
            }
        })
    );
}

#[test]
fn test_tool_result_round_trip_events() {
    let start = to_value(&ClientEvent::content_start_tool("p1", "c1", "tool-abc"));
    assert_eq!(
        start,
        json!({
            "event": {
                "contentStart": {
                    "promptName": "p1",
                    "contentName": "c1",
                    "interactive": false,
                    "type": "TOOL",
                    "toolResultInputConfiguration": {
                        "toolUseId": "tool-abc",
                        "type": "TEXT",
                        "textInputConfiguration": { "mediaType": "text/plain" }
                    }
                }
            }
        })
    );

    let result = to_value(&ClientEvent::text_input_tool("p1", "c1", "42 degrees"));
    assert_eq!(
        result,
        json!({
            "event": {
                "textInput": {
                    "promptName": "p1",
                    "contentName": "c1",
                    "content": "42 degrees",
                    "role": "TOOL"
                }
            }
        })
    );
}

#[test]
fn test_closing_events() {
    assert_eq!(
        to_value(&ClientEvent::content_end("p1", "c1")),
        json!({ "event": { "contentEnd": { "promptName": "p1", "contentName": "c1" } } })
    );
    assert_eq!(
        to_value(&ClientEvent::prompt_end("p1")),
        json!({ "event": { "promptEnd": { "promptName": "p1" } } })
    );
    assert_eq!(
        serde_json::to_string(&ClientEvent::session_end()).unwrap(),
        r#"{"event":{"sessionEnd":{}}}"#
    );
}

#[test]
fn test_shaping_is_idempotent() {
    let factory = EventFactory::new();
    assert_eq!(factory.prompt_start("p1"), factory.prompt_start("p1"));
    assert_eq!(
        to_value(&factory.session_start()),
        to_value(&factory.session_start())
    );
    assert_eq!(
        factory.content_start_tool("p1", "c1", "t"),
        factory.content_start_tool("p1", "c1", "t")
    );
}

#[test]
fn test_canonical_session_order() {
    let factory = EventFactory::new();
    let events = [
        factory.session_start(),
        factory.prompt_start("p1"),
        factory.content_start_text_as("p1", "sys", Role::System),
        factory.system_prompt("p1", "sys"),
        factory.content_end("p1", "sys"),
        factory.prompt_end("p1"),
        factory.session_end(),
    ];

    let kinds: Vec<&str> = events.iter().map(ClientEvent::kind).collect();
    assert_eq!(
        kinds,
        [
            "sessionStart",
            "promptStart",
            "contentStart",
            "textInput",
            "contentEnd",
            "promptEnd",
            "sessionEnd"
        ]
    );
    for event in &events[1..6] {
        assert_eq!(event.prompt_name(), Some("p1"));
    }
    for event in &events[2..5] {
        assert_eq!(event.content_name(), Some("sys"));
    }
}

#[test]
fn test_deserialize_wire_event() {
    let json = json!({
        "event": {
            "contentStart": {
                "promptName": "p1",
                "contentName": "c9",
                "interactive": false,
                "type": "TOOL",
                "toolResultInputConfiguration": {
                    "toolUseId": "tool-xyz",
                    "type": "TEXT",
                    "textInputConfiguration": { "mediaType": "text/plain" }
                }
            }
        }
    });

    let event: ClientEvent = serde_json::from_value(json).expect("deserialize contentStart");
    assert_eq!(event, ClientEvent::content_start_tool("p1", "c9", "tool-xyz"));

    let end: ClientEvent =
        serde_json::from_str(r#"{"event":{"sessionEnd":{}}}"#).expect("deserialize sessionEnd");
    assert_eq!(end, ClientEvent::session_end());
}
