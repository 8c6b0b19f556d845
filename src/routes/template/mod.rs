use uuid::Uuid;

use crate::types::error::AppError;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub(crate) fn parse_template_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::BadRequest(format!("malformed template id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hyphenated_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_template_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_object_id_style_strings() {
        let err = parse_template_id("64b7f0c2e1d3a4b5c6d7e8f9").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
