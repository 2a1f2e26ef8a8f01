/// Shareable quiz link: `{base}/quiz/{quiz_id}`. A trailing slash on `base`
/// is tolerated.
pub fn quiz_url(base: &str, quiz_id: &str) -> String {
    format!("{}/quiz/{}", base.trim_end_matches('/'), quiz_id)
}
