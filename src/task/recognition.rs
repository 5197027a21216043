//! Recognition tasks: the backend classifies an image payload directly,
//! often synchronously inside the `createTask` response.

use super::ImageData;
use serde::Serialize;

/// Plain image-to-text OCR.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageToTextTask {
    /// Image content; raw bytes are base64-encoded on serialization.
    pub body: ImageData,
    /// Recognition module to use, e.g. `common` or `module_001`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Required matching degree, 0.8 to 1. Below-range recognitions are
    /// not charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Classify a reCAPTCHA image grid against a question.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReCaptchaV2Classification {
    pub image: ImageData,
    /// Question identifier, e.g. `/m/0k4j` for "car".
    pub question: String,
    /// Page source URL, improves accuracy.
    #[serde(rename = "websiteURL", skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    /// Website key, improves accuracy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_key: Option<String>,
}

/// Classify an AWS WAF image set against a question.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsWafClassification {
    pub images: Vec<ImageData>,
    pub question: String,
    #[serde(rename = "websiteURL", skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

/// Generic vision model over a foreground/background image pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionEngine {
    /// Model name: `slider_1`, `rotate_1`, `space_detection`,
    /// `slider_temu_plus` or `select_temu`.
    pub module: String,
    #[serde(rename = "websiteURL", skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    pub image: ImageData,
    pub image_background: ImageData,
    /// Required by the `space_detection` module.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}
