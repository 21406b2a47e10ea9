use crate::SendEmail;
use anyhow::Context;

pub(crate) async fn send(
    client: &reqwest::Client,
    url: &str,
    email: &SendEmail,
) -> anyhow::Result<()> {
    let response = client
        .post(format!("{}/api/v1/email/send", url))
        .json(email)
        .send()
        .await
        .context("email provider request failed")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("email provider refused send: {} {}", status, body);
    }

    Ok(())
}
