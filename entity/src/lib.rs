pub mod template;

/*
 A template is one row holding one JSON document. The document shape lives in
 `template::TemplateData` so the column round-trips as a typed struct rather
 than a loose `serde_json::Value`.
 */
