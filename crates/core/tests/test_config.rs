#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, SocketAddr};

    use callback_core::ReceiverConfig;

    #[test]
    fn test_default_port_is_fixed() {
        let config = ReceiverConfig::default();

        assert_eq!(config.port, 8888);
        assert_eq!(config.path, "/callback");
        assert_eq!(
            config.bind_addr(),
            SocketAddr::from((Ipv4Addr::LOCALHOST, 8888))
        );
    }

    #[test]
    fn test_redirect_uri() {
        let config = ReceiverConfig::default();

        assert_eq!(config.redirect_uri(), "http://localhost:8888/callback");
    }

    #[test]
    fn test_with_port_keeps_path() {
        let config = ReceiverConfig::default().with_port(0);

        assert_eq!(config.port, 0);
        assert_eq!(config.path, "/callback");
        assert_eq!(config.bind_addr().port(), 0);
    }
}
