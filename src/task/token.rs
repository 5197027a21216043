//! Token tasks: the backend drives the target site's challenge and hands
//! back a verification token once the job resolves.
//!
//! `...ProxyLess` shapes run on the service's own egress; their with-proxy
//! counterparts require a proxy URL in the form the service documents
//! (`scheme:host:port:user:pass` or a plain URL).

use super::Cookie;
use serde::Serialize;
use serde_json::Value;

/// Geetest v3/v4 through your proxy.
///
/// v3 requires `challenge`; v4 requires `captcha_id`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeeTestTask {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    /// The site's `gt` field.
    pub gt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geetest_api_server_subdomain: Option<String>,
    pub proxy: String,
}

/// Geetest v3/v4 on the service's egress.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeeTestTaskProxyLess {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub gt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geetest_api_server_subdomain: Option<String>,
}

/// reCAPTCHA v2 through your proxy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReCaptchaV2Task {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    /// The domain's public site key.
    pub website_key: String,
    pub proxy: String,
    /// The `sa` value of the /anchor request, when the site sets one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_invisible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<Cookie>>,
}

/// reCAPTCHA v2 on the service's egress.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReCaptchaV2TaskProxyLess {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub website_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_invisible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<Cookie>>,
}

/// reCAPTCHA v2 Enterprise through your proxy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReCaptchaV2EnterpriseTask {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub website_key: String,
    pub proxy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_invisible: Option<bool>,
    /// Domain reCAPTCHA is served from, when it is not google.com.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<Cookie>>,
}

/// reCAPTCHA v2 Enterprise on the service's egress.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReCaptchaV2EnterpriseTaskProxyLess {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub website_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_invisible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<Cookie>>,
}

/// reCAPTCHA v3 through your proxy. `page_action` is the widget action
/// the site passes to `grecaptcha.execute`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReCaptchaV3Task {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub website_key: String,
    pub page_action: String,
    pub proxy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<Cookie>>,
}

/// reCAPTCHA v3 on the service's egress.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReCaptchaV3TaskProxyLess {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub website_key: String,
    pub page_action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<Cookie>>,
}

/// reCAPTCHA v3 Enterprise through your proxy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReCaptchaV3EnterpriseTask {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub website_key: String,
    pub page_action: String,
    pub proxy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<Cookie>>,
}

/// reCAPTCHA v3 Enterprise on the service's egress.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReCaptchaV3EnterpriseTaskProxyLess {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub website_key: String,
    pub page_action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<Cookie>>,
}

/// MTCaptcha through your proxy. The key is the `sk=MTPublic-...` value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MTCaptchaTask {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub website_key: String,
    pub proxy: String,
}

/// Datadome slider. The captcha URL must carry `t=fe`; `t=bv` means the
/// egress IP is already banned.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatadomeSliderTask {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub captcha_url: String,
    pub proxy: String,
    /// Must match the user agent that requested `captcha_url`.
    pub user_agent: String,
}

/// Cloudflare Turnstile, proxyless only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnstileTask {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub website_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TurnstileMetadata>,
}

/// Extra data from the Turnstile element's `data-*` attributes.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnstileMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdata: Option<String>,
}

/// AWS WAF challenge, shared by the with-proxy and proxyless variants.
///
/// The `aws_*` fields are required when the protected page answers 405
/// (and `aws_challenge_js` also on 202); they come from the challenge
/// page's inline configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsWafTask {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_iv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_context: Option<String>,
    #[serde(rename = "awsChallengeJS", skip_serializing_if = "Option::is_none")]
    pub aws_challenge_js: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

/// Friendly Captcha, proxyless only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendlyCaptchaTask {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub website_key: String,
}

/// Yandex SmartCaptcha, proxyless only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YandexCaptchaTask {
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub website_key: String,
}
