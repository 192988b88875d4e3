// Admin gate password. This is a shared secret compared in plain text, not
// authentication; override it at build time with SITE_ADMIN_PASSWORD.
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

pub fn admin_password() -> &'static str {
    option_env!("SITE_ADMIN_PASSWORD").unwrap_or(DEFAULT_ADMIN_PASSWORD)
}

#[cfg(debug_assertions)]
pub fn contact_submit_delay_ms() -> u32 {
    500  // Shorter wait when running locally
}

#[cfg(not(debug_assertions))]
pub fn contact_submit_delay_ms() -> u32 {
    1500
}

// Share of simulated contact submissions that report failure.
pub const CONTACT_FAILURE_RATE: f64 = 0.2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_delay_depends_on_build_profile() {
        let expected = if cfg!(debug_assertions) { 500 } else { 1500 };
        assert_eq!(contact_submit_delay_ms(), expected);
    }

    #[test]
    fn failure_rate_is_a_probability() {
        assert!((0.0..1.0).contains(&CONTACT_FAILURE_RATE));
    }
}
