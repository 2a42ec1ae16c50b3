/// Logs entry into a state update and its outcome.
/// `Err` outcomes are logged as warnings.
#[macro_export]
macro_rules! log_update {
    ($name:expr, $body:block) => {{
        let name = $name;
        log::debug!("-> {}", name);
        let result = { $body };
        match &result {
            Ok(value) => log::debug!("<- {}: {:?}", name, value),
            Err(err) => log::warn!("<- {}: {}", name, err),
        }
        result
    }};
}
