#[cfg(test)]
mod tests {
    use callback_core::{CallbackError, CallbackReply, CallbackRequest, ReplyStatus};

    #[test]
    fn test_code_present() {
        let request = CallbackRequest::new(Some("abc123"));

        assert_eq!(request.code(), Some("abc123"));
        assert!(request.has_code());
    }

    #[test]
    fn test_code_absent() {
        let request = CallbackRequest::default();

        assert_eq!(request.code(), None);
        assert!(!request.has_code());
    }

    #[test]
    fn test_empty_code_counts_as_missing() {
        let request = CallbackRequest::new(Some(""));

        // The raw value is kept, only the accessor filters it
        assert_eq!(request.code, Some(String::new()));
        assert_eq!(request.code(), None);
    }

    #[test]
    fn test_deserialize_from_query_string() {
        let request: CallbackRequest = serde_urlencoded::from_str("code=abc123").unwrap();
        assert_eq!(request.code(), Some("abc123"));

        let request: CallbackRequest = serde_urlencoded::from_str("").unwrap();
        assert_eq!(request.code, None);

        let request: CallbackRequest = serde_urlencoded::from_str("code=").unwrap();
        assert!(!request.has_code());
    }

    #[test]
    fn test_deserialize_ignores_other_parameters() {
        let request: CallbackRequest =
            serde_urlencoded::from_str("state=xyz&code=a%2Fb&scope=user").unwrap();

        assert_eq!(request.code(), Some("a/b"));
    }

    #[test]
    fn test_from_query_pairs_keeps_first_non_empty_code() {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str("code=&state=xyz&code=abc&code=def").unwrap();

        let request = CallbackRequest::from_query_pairs(pairs);

        assert_eq!(request.code(), Some("abc"));
    }

    #[test]
    fn test_from_query_pairs_without_code() {
        let request = CallbackRequest::from_query_pairs([("state", "xyz")]);
        assert_eq!(request.code, None);

        let request = CallbackRequest::from_query_pairs([("code", ""), ("code", "")]);
        assert_eq!(request.code, Some(String::new()));
        assert!(!request.has_code());
    }

    #[test]
    fn test_local_addr_error_message() {
        let error = CallbackError::LocalAddr(std::io::Error::new(
            std::io::ErrorKind::NotConnected,
            "socket closed",
        ));

        let message = error.to_string();
        assert!(message.starts_with("failed to read callback listener address"));
        assert!(!message.contains("stopped unexpectedly"));
    }

    #[test]
    fn test_reply_status_codes() {
        assert_eq!(ReplyStatus::Ok.as_u16(), 200);
        assert_eq!(ReplyStatus::InternalServerError.as_u16(), 500);

        assert!(CallbackReply::ok("fine").is_success());
        assert!(!CallbackReply::internal_error("broken").is_success());
    }
}
