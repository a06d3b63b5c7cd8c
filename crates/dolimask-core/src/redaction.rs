use crate::config::MysqlConfig;

/// Describe a MySQL target for operator-visible output without exposing
/// the password.
pub fn redact_mysql_target(config: &MysqlConfig) -> String {
    format!(
        "mysql://{}:***@{}:{}/{}",
        config.user, config.host, config.port, config.database
    )
}

/// Mask one value inside a displayed argument list, e.g. the password
/// passed to `sshpass`.
pub fn mask_argument(args: &[String], secret: &str) -> Vec<String> {
    args.iter()
        .map(|arg| {
            if !secret.is_empty() && arg == secret {
                "********".to_string()
            } else {
                arg.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MYSQL_PORT;

    #[test]
    fn target_never_contains_password() {
        let config = MysqlConfig {
            host: "db.local".to_string(),
            port: DEFAULT_MYSQL_PORT,
            user: "app".to_string(),
            password: "s3cret".to_string(),
            database: "dolibarr".to_string(),
        };
        let shown = redact_mysql_target(&config);
        assert!(shown.contains("app:***@db.local:3306/dolibarr"));
        assert!(!shown.contains("s3cret"));
    }

    #[test]
    fn masks_only_the_secret_argument() {
        let args = vec![
            "sshpass".to_string(),
            "-p".to_string(),
            "hunter2".to_string(),
            "ssh".to_string(),
        ];
        let masked = mask_argument(&args, "hunter2");
        assert_eq!(masked[2], "********");
        assert_eq!(masked[3], "ssh");
    }

    #[test]
    fn empty_secret_masks_nothing() {
        let args = vec!["ssh".to_string(), String::new()];
        let masked = mask_argument(&args, "");
        assert_eq!(masked, args);
    }
}
