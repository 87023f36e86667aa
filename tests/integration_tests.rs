use diet_planner::adapters::http::{router, AppState};
use diet_planner::domain::model::FeatureVector;
use diet_planner::domain::ports::Classifier;
use diet_planner::{InMemoryResultStore, PlannerConfig, PlannerError, PlannerService};
use reqwest::header::{COOKIE, LOCATION, SET_COOKIE};
use reqwest::{redirect, Client, StatusCode};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

struct FixedClassifier(&'static str);

impl Classifier for FixedClassifier {
    fn predict(&self, _features: &FeatureVector) -> diet_planner::Result<String> {
        Ok(self.0.to_string())
    }
}

struct BrokenClassifier;

impl Classifier for BrokenClassifier {
    fn predict(&self, _features: &FeatureVector) -> diet_planner::Result<String> {
        Err(PlannerError::PredictionError {
            message: "model exploded".to_string(),
        })
    }
}

async fn spawn_app(state: AppState) -> String {
    let app = router(state, 16 * 1024);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn state_with(classifier: Arc<dyn Classifier>) -> AppState {
    let store = InMemoryResultStore::new(NonZeroUsize::new(16).unwrap(), Duration::from_secs(60));
    AppState::new(
        PlannerService::new(classifier),
        Arc::new(store),
        "planner_session",
    )
}

fn client() -> Client {
    Client::builder()
        .redirect(redirect::Policy::none())
        .build()
        .unwrap()
}

fn valid_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("age", "29"),
        ("gender", "Male"),
        ("height", "180"),
        ("weight", "95"),
        ("diet", "Non-Vegetarian"),
        ("exercise", "Strength Training"),
    ]
}

fn session_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.to_string())
}

#[tokio::test]
async fn test_get_renders_empty_form() {
    let base = spawn_app(state_with(Arc::new(FixedClassifier("Obese")))).await;

    let response = client().get(&base).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("<form method=\"post\" action=\"/\">"));
    assert!(!body.contains("Your results"));
}

#[tokio::test]
async fn test_submission_redirects_and_results_show_once() {
    let base = spawn_app(state_with(Arc::new(FixedClassifier("Overweight")))).await;
    let client = client();

    // POST stores the result and redirects
    let response = client.post(&base).form(&valid_form()).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
    let cookie = session_cookie(&response).expect("session cookie should be set");
    assert!(cookie.starts_with("planner_session="));

    // First GET shows the results with the form pre-filled
    let body = client
        .get(&base)
        .header(COOKIE, &cookie)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("<strong>Predicted category:</strong> Overweight"));
    assert!(body.contains("29.32 (Overweight)"));
    assert!(body.contains("<li>Scrambled egg whites with spinach and mushrooms</li>"));
    assert!(body.contains("<li>3 sets of 15 bodyweight squats</li>"));
    assert!(body.contains("<option value=\"Male\" selected>"));
    assert!(body.contains("value=\"95\""));

    // Second GET no longer has them
    let body = client
        .get(&base)
        .header(COOKIE, &cookie)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(!body.contains("Your results"));
}

#[tokio::test]
async fn test_existing_session_cookie_is_reused() {
    let base = spawn_app(state_with(Arc::new(FixedClassifier("Obese")))).await;
    let client = client();

    let first = client.post(&base).form(&valid_form()).send().await.unwrap();
    let cookie = session_cookie(&first).unwrap();

    let second = client
        .post(&base)
        .header(COOKIE, &cookie)
        .form(&valid_form())
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    assert!(second.headers().get(SET_COOKIE).is_none());

    let body = client
        .get(&base)
        .header(COOKIE, &cookie)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("<strong>Predicted category:</strong> Obese"));
}

#[tokio::test]
async fn test_missing_field_renders_plain_form() {
    let base = spawn_app(state_with(Arc::new(FixedClassifier("Obese")))).await;

    let mut form = valid_form();
    form.retain(|(name, _)| *name != "weight");

    let response = client().post(&base).form(&form).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(SET_COOKIE).is_none());

    let body = response.text().await.unwrap();
    assert!(body.contains("<form method=\"post\" action=\"/\">"));
    assert!(!body.contains("Your results"));
}

#[tokio::test]
async fn test_invalid_values_render_plain_form() {
    let base = spawn_app(state_with(Arc::new(FixedClassifier("Obese")))).await;
    let client = client();

    let cases = [("age", "abc"), ("height", "0"), ("height", "1e-200"), ("weight", "-5"), ("diet", "Keto"), ("exercise", "Dancing")];

    for (field, value) in cases {
        let form: Vec<(&str, &str)> = valid_form()
            .into_iter()
            .map(|(name, v)| if name == field { (name, value) } else { (name, v) })
            .collect();

        let response = client.post(&base).form(&form).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "field {} = {}", field, value);
        let body = response.text().await.unwrap();
        assert!(!body.contains("Your results"), "field {} = {}", field, value);
    }

    // The server is still answering afterwards
    let response = client.get(format!("{}/health", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_non_form_body_renders_plain_form() {
    let base = spawn_app(state_with(Arc::new(FixedClassifier("Obese")))).await;

    let response = client()
        .post(&base)
        .json(&serde_json::json!({ "age": 30 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!response.text().await.unwrap().contains("Your results"));
}

#[tokio::test]
async fn test_prediction_failure_renders_plain_form() {
    let base = spawn_app(state_with(Arc::new(BrokenClassifier))).await;

    let response = client().post(&base).form(&valid_form()).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(SET_COOKIE).is_none());
    assert!(!response.text().await.unwrap().contains("Your results"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let base = spawn_app(state_with(Arc::new(FixedClassifier("Obese")))).await;

    let response = client().get(format!("{}/health", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_end_to_end_with_shipped_model() {
    let models = concat!(env!("CARGO_MANIFEST_DIR"), "/models");
    let config = PlannerConfig::from_toml_str(&format!(
        "[model]\nclassifier_path = \"{models}/diet_model.json\"\nlabel_encoder_path = \"{models}/label_encoder.json\"\n"
    ))
    .unwrap();

    let base = spawn_app(AppState::from_config(&config).unwrap()).await;
    let client = client();

    let form = [
        ("age", "24"),
        ("gender", "Female"),
        ("height", "180"),
        ("weight", "50"),
        ("diet", "Vegan"),
        ("exercise", "Yoga"),
    ];
    let response = client.post(&base).form(&form).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response).unwrap();

    let body = client
        .get(&base)
        .header(COOKIE, &cookie)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("<strong>Predicted category:</strong> Underweight"));
    assert!(body.contains("15.43 (Underweight)"));
    assert!(body.contains("<li>Chickpea curry with brown rice</li>"));
    assert!(body.contains("<li>Warrior Pose Flow (Virabhadrasana)</li>"));
}
