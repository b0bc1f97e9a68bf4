use payload_template::{
    CollectingSink, CollectionSchema, ContextBuilder, Diagnostic, FieldType, NullSink,
    PayloadEngine, build_record, cast_value_to_type, normalize_array_value, render_template,
};
use serde_json::{Value, json};

fn chunk_context() -> Value {
    ContextBuilder::new()
        .page(json!({
            "id": "doc-17",
            "title": "Installing the agent",
            "url": "https://docs.example.com/install",
            "tags": ["setup", "linux"],
            "tagLine": "[\"setup\",\"linux\"]",
            "metadata": { "lang": "en", "version": 3 }
        }))
        .site(json!({ "name": "Docs", "url": "https://docs.example.com" }))
        .chunk(json!({
            "index": 2,
            "text": "Run the installer as root.",
            "charCount": 26,
            "heading": "Prerequisites",
            "metadata": { "position": 2, "tokens": "7" }
        }))
        .provider(json!({ "id": "openai", "model": "text-embedding-3-small" }))
        .embedding(json!({ "dimensions": 1536 }))
        .build()
}

fn schema() -> CollectionSchema {
    CollectionSchema::from_json_str(
        r#"{
            "fields": [
                { "name": "content", "type": "string", "isArray": false, "template": "{{ chunk.text }}" },
                { "name": "section", "type": "string", "isArray": false, "template": "{{ page.title }} / {{ chunk.heading }}" },
                { "name": "chars", "type": "double", "isArray": false, "template": "{{ chunk.charCount }}" },
                { "name": "tokens", "type": "double", "isArray": false, "template": "{{ chunk.metadata.tokens }}" },
                { "name": "tags", "type": "object", "isArray": true, "template": "{{ page.tags }}" },
                { "name": "tagLine", "type": "string", "isArray": false, "template": "{{ page.tags }}" },
                { "name": "meta", "type": "object", "isArray": false, "template": "{{ page.metadata }}" },
                { "name": "source", "type": "object", "isArray": false, "template": "{\"site\": \"{{ site.name }}\", \"chunk\": {{ chunk.index }}}" },
                { "name": "model", "type": "string", "isArray": true, "template": "{{ provider.model }}" },
                { "name": "", "type": "string", "isArray": false, "template": "{{ chunk.text }}" },
                { "name": "summary", "type": "string", "isArray": true, "template": "{{ chunk.summary }}" }
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_record_for_chunk() {
    let record = build_record(&schema().fields, &chunk_context(), &NullSink);

    assert_eq!(
        Value::Object(record),
        json!({
            "content": "Run the installer as root.",
            "section": "Installing the agent / Prerequisites",
            "chars": 26,
            "tokens": 7,
            "tags": ["setup", "linux"],
            "tagLine": "[\"setup\",\"linux\"]",
            "meta": { "lang": "en", "version": 3 },
            "source": { "site": "Docs", "chunk": 2 },
            "model": ["text-embedding-3-small"],
            "summary": []
        })
    );
}

#[test]
fn test_record_field_order() {
    let record = build_record(&schema().fields, &chunk_context(), &NullSink);
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "content", "section", "chars", "tokens", "tags", "tagLine", "meta", "source", "model",
            "summary"
        ]
    );
}

#[test]
fn test_record_is_deterministic() {
    let engine = PayloadEngine::with_sink(NullSink);
    let schema = schema();
    let context = chunk_context();
    assert_eq!(
        engine.build_schema_record(&schema, &context),
        engine.build_schema_record(&schema, &context)
    );
}

#[test]
fn test_incomplete_templates_never_fail() {
    let context = chunk_context();
    let sink = CollectingSink::new();
    for template in ["{{", "{{ chunk.", "{{ chunk.text", "}} {{", "{{ [0] }}", "{{ chunk.text[x] }}"] {
        for field_type in [FieldType::String, FieldType::Double, FieldType::Object] {
            let rendered = render_template(template, &context, &sink);
            let cast = cast_value_to_type(rendered, field_type, &sink);
            normalize_array_value(cast, true);
        }
    }
}

#[test]
fn test_object_fallback_is_reported() {
    let context = json!({ "chunk": { "heading": "Intro" } });
    let sink = CollectingSink::new();
    let engine = PayloadEngine::with_sink(&sink);

    let schema = CollectionSchema::from_json_str(
        r#"[{ "name": "meta", "type": "object", "template": "heading={{ chunk.heading }}" }]"#,
    )
    .unwrap();
    let record = engine.build_schema_record(&schema, &context);

    assert_eq!(record["meta"], json!("heading=Intro"));
    let diagnostics = sink.take();
    assert_eq!(diagnostics.len(), 1);
    match &diagnostics[0] {
        Diagnostic::ObjectParse { input, .. } => assert_eq!(input, "heading=Intro"),
        other => panic!("unexpected diagnostic: {other:?}"),
    }
}

#[test]
fn test_records_for_many_chunks() {
    let schema = schema();
    let contexts: Vec<Value> = (0..3)
        .map(|i| {
            ContextBuilder::new()
                .chunk(json!({ "index": i, "text": format!("part {i}") }))
                .build()
        })
        .collect();

    let records = PayloadEngine::with_sink(NullSink).build_records(&schema.fields, &contexts);
    let contents: Vec<&Value> = records.iter().map(|r| &r["content"]).collect();
    assert_eq!(contents, vec![&json!("part 0"), &json!("part 1"), &json!("part 2")]);
    assert_eq!(records[1]["tags"], json!([]));
}
