//! Client for the prediction and coaching backend.

use crate::config::api_url;
use crate::error::{AppError, Result};
use crate::models::{
    ChatReply, CoachInsights, Prediction, SessionStart, UserProfile, VideoGuide, VideoResult,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Serialize)]
struct PredictRequest {
    additional_monthly_savings: f64,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    session_id: &'a str,
    message: &'a str,
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.ok() {
        warn!(status = resp.status(), url = %resp.url(), "backend returned an error status");
        return Err(AppError::Http {
            status: resp.status(),
            url: resp.url(),
        });
    }
    Ok(resp.json::<T>().await?)
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T> {
    let url = api_url(path);
    debug!(%url, "POST");
    let resp = Request::post(&url).json(body)?.send().await?;
    decode(resp).await
}

pub async fn fetch_prediction(additional_monthly_savings: f64) -> Result<Prediction> {
    post_json(
        "/api/predict",
        &PredictRequest {
            additional_monthly_savings,
        },
    )
    .await
}

pub async fn start_session(profile: &UserProfile) -> Result<SessionStart> {
    post_json("/api/ai/session/start", profile).await
}

pub async fn send_message(session_id: &str, message: &str) -> Result<ChatReply> {
    post_json(
        "/api/ai/chat/send",
        &ChatRequest {
            session_id,
            message,
        },
    )
    .await
}

pub async fn fetch_insights(session_id: &str) -> Result<CoachInsights> {
    let url = api_url(&format!("/api/ai/session/{}/insights", session_id));
    debug!(%url, "GET");
    let resp = Request::get(&url).send().await?;
    decode(resp).await
}

pub async fn generate_video(session_id: &str) -> Result<VideoGuide> {
    let url = api_url(&format!("/api/ai/generate-video/{}", session_id));
    debug!(%url, "POST");
    let resp = Request::post(&url).send().await?;
    video_guide(decode::<VideoResult>(resp).await?)
}

fn video_guide(result: VideoResult) -> Result<VideoGuide> {
    match (result.success, result.video_path) {
        (true, Some(path)) => Ok(VideoGuide {
            path,
            pattern: result.pattern.unwrap_or_else(|| "general".to_string()),
        }),
        _ => Err(AppError::Backend(
            result.error.unwrap_or_else(|| "Unknown error".to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_body_uses_backend_field_name() {
        let body = serde_json::to_value(PredictRequest {
            additional_monthly_savings: 0.0,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "additional_monthly_savings": 0.0 }));
    }

    #[test]
    fn chat_body_carries_session_and_message() {
        let body = serde_json::to_value(ChatRequest {
            session_id: "abc",
            message: "How can I save more?",
        })
        .unwrap();
        assert_eq!(body["session_id"], "abc");
        assert_eq!(body["message"], "How can I save more?");
    }

    #[test]
    fn successful_video_becomes_guide() {
        let result: VideoResult = serde_json::from_str(
            r#"{"success":true,"video_path":"out/guide.mp4","pattern":"impulse"}"#,
        )
        .unwrap();
        let guide = video_guide(result).unwrap();
        assert_eq!(guide.path, "out/guide.mp4");
        assert_eq!(guide.pattern, "impulse");
    }

    #[test]
    fn failed_video_surfaces_backend_error() {
        let result: VideoResult =
            serde_json::from_str(r#"{"success":false,"error":"moviepy missing"}"#).unwrap();
        match video_guide(result) {
            Err(AppError::Backend(message)) => assert_eq!(message, "moviepy missing"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
