//! Typed REST client.
//!
//! One attempt per request, one global timeout, errors surfaced to the
//! caller. No retries, no backoff.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use nutriveda_core::assessment::ConstitutionSummary;
use nutriveda_core::export::{ExportOptions, PlanReport};
use nutriveda_core::models::{AssessmentData, DietPlan, FoodItem, Patient, PrescriptionData, Recipe};

use crate::envelope::ApiResponse;
use crate::session::SessionStore;
use crate::ApiError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// REST client for the NutriVeda backend.
pub struct ApiClient {
    base_url: String,
    agent: ureq::Agent,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a client with the default timeout.
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        Self::with_timeout(base_url, session, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        session: Arc<dyn SessionStore>,
        timeout: Duration,
    ) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            agent,
            session,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn prepare(&self, method: &str, endpoint: &str) -> ureq::Request {
        let mut req = self
            .agent
            .request(method, &self.url(endpoint))
            .set("Content-Type", "application/json");
        if let Some(token) = self.session.current_token() {
            req = req.set("Authorization", &format!("Bearer {}", token));
        }
        req
    }

    fn parse<T: DeserializeOwned>(response: ureq::Response) -> Result<T, ApiError> {
        let envelope: ApiResponse<T> = response.into_json().map_err(ApiError::Io)?;
        envelope.into_result()
    }

    fn map_error(e: ureq::Error) -> ApiError {
        match e {
            ureq::Error::Status(code, resp) => {
                let body = resp.into_string().unwrap_or_default();
                ApiError::Status { code, body }
            }
            ureq::Error::Transport(t) => {
                let msg = t.to_string();
                if msg.contains("timeout") || msg.contains("timed out") {
                    ApiError::Timeout
                } else {
                    ApiError::Transport(msg)
                }
            }
        }
    }

    // =========================================================================
    // Generic verbs
    // =========================================================================

    pub fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        debug!(endpoint, "GET");
        let response = self.prepare("GET", endpoint).call().map_err(Self::map_error);
        match response {
            Ok(resp) => Self::parse(resp),
            Err(e) => {
                warn!(endpoint, error = %e, "request failed");
                Err(e)
            }
        }
    }

    pub fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(endpoint, "POST");
        let response = self
            .prepare("POST", endpoint)
            .send_json(serde_json::to_value(body)?)
            .map_err(Self::map_error);
        match response {
            Ok(resp) => Self::parse(resp),
            Err(e) => {
                warn!(endpoint, error = %e, "request failed");
                Err(e)
            }
        }
    }

    pub fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(endpoint, "PUT");
        let response = self
            .prepare("PUT", endpoint)
            .send_json(serde_json::to_value(body)?)
            .map_err(Self::map_error);
        match response {
            Ok(resp) => Self::parse(resp),
            Err(e) => {
                warn!(endpoint, error = %e, "request failed");
                Err(e)
            }
        }
    }

    pub fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        debug!(endpoint, "DELETE");
        let response = self
            .prepare("DELETE", endpoint)
            .call()
            .map_err(Self::map_error);
        match response {
            Ok(resp) => {
                let envelope: ApiResponse<serde_json::Value> =
                    resp.into_json().map_err(ApiError::Io)?;
                envelope.into_result().map(|_| ())
            }
            Err(e) => {
                warn!(endpoint, error = %e, "request failed");
                Err(e)
            }
        }
    }

    // =========================================================================
    // Patients
    // =========================================================================

    pub fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.get("/patients")
    }

    pub fn get_patient(&self, id: &str) -> Result<Patient, ApiError> {
        self.get(&format!("/patients/{}", id))
    }

    pub fn create_patient(&self, patient: &Patient) -> Result<Patient, ApiError> {
        self.post("/patients", patient)
    }

    pub fn update_patient(&self, patient: &Patient) -> Result<Patient, ApiError> {
        self.put(&format!("/patients/{}", patient.id), patient)
    }

    pub fn delete_patient(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/patients/{}", id))
    }

    // =========================================================================
    // Foods
    // =========================================================================

    pub fn list_foods(&self) -> Result<Vec<FoodItem>, ApiError> {
        self.get("/foods")
    }

    pub fn get_food(&self, id: &str) -> Result<FoodItem, ApiError> {
        self.get(&format!("/foods/{}", id))
    }

    pub fn create_food(&self, food: &FoodItem) -> Result<FoodItem, ApiError> {
        self.post("/foods", food)
    }

    pub fn update_food(&self, food: &FoodItem) -> Result<FoodItem, ApiError> {
        self.put(&format!("/foods/{}", food.id), food)
    }

    pub fn delete_food(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/foods/{}", id))
    }

    // =========================================================================
    // Recipes
    // =========================================================================

    pub fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        self.get("/recipes")
    }

    pub fn create_recipe(&self, recipe: &Recipe) -> Result<Recipe, ApiError> {
        self.post("/recipes", recipe)
    }

    pub fn delete_recipe(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/recipes/{}", id))
    }

    // =========================================================================
    // Diet plans
    // =========================================================================

    pub fn list_diet_plans(&self, patient_id: &str) -> Result<Vec<DietPlan>, ApiError> {
        self.get(&format!("/diet-plans?patientId={}", patient_id))
    }

    pub fn create_diet_plan(&self, plan: &DietPlan) -> Result<DietPlan, ApiError> {
        self.post("/diet-plans", plan)
    }

    pub fn delete_diet_plan(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/diet-plans/{}", id))
    }

    // =========================================================================
    // Prescriptions
    // =========================================================================

    pub fn list_prescriptions(&self, patient_id: &str) -> Result<Vec<PrescriptionData>, ApiError> {
        self.get(&format!("/prescriptions?patientId={}", patient_id))
    }

    pub fn create_prescription(
        &self,
        prescription: &PrescriptionData,
    ) -> Result<PrescriptionData, ApiError> {
        self.post("/prescriptions", prescription)
    }

    // =========================================================================
    // Assessments
    // =========================================================================

    pub fn create_assessment(
        &self,
        patient_id: &str,
        assessment: &AssessmentData,
    ) -> Result<AssessmentData, ApiError> {
        self.post(&format!("/assessments/patient/{}", patient_id), assessment)
    }

    pub fn get_assessment(&self, patient_id: &str) -> Result<AssessmentData, ApiError> {
        self.get(&format!("/assessments/patient/{}", patient_id))
    }

    pub fn update_assessment(
        &self,
        assessment_id: &str,
        assessment: &AssessmentData,
    ) -> Result<AssessmentData, ApiError> {
        self.put(&format!("/assessments/{}", assessment_id), assessment)
    }

    /// Server-side dosha analysis of an assessment record.
    pub fn analyze_dosha(
        &self,
        assessment: &AssessmentData,
    ) -> Result<ConstitutionSummary, ApiError> {
        self.post("/assessments/analyze-dosha", assessment)
    }

    // =========================================================================
    // Reports
    // =========================================================================

    pub fn generate_report(&self, request: &ReportRequest) -> Result<PlanReport, ApiError> {
        self.post("/reports/generate", request)
    }

    pub fn get_report(&self, id: &str) -> Result<PlanReport, ApiError> {
        self.get(&format!("/reports/{}", id))
    }
}

/// Parameters for server-side report generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRequest {
    /// Report family (e.g., "diet-plan")
    pub report_type: String,
    /// Plan the report covers
    pub plan_id: String,
    /// Rendering options forwarded to the server
    pub options: ExportOptions,
}
