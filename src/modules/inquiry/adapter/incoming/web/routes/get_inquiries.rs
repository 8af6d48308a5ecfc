use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::inquiry::application::use_cases::get_inquiries::GetInquiriesError;
use crate::inquiry::domain::entities::InquiryStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

#[derive(Deserialize)]
pub struct InquiryListQuery {
    pub status: Option<InquiryStatus>,
}

#[get("/api/admin/inquiries")]
pub async fn get_inquiries_handler(
    _session: AdminSession,
    query: web::Query<InquiryListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_inquiries_use_case.execute(query.status).await {
        Ok(inquiries) => ApiResponse::success(inquiries),
        Err(GetInquiriesError::QueryError(ref e)) => {
            error!(error = %e, "Failed to list inquiries");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::application::use_cases::get_inquiries::IGetInquiriesUseCase;
    use crate::inquiry::domain::entities::Inquiry;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{accepting_token_provider, rejecting_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct MockGetInquiries {
        inquiries: Vec<Inquiry>,
        seen_filter: Mutex<Option<Option<InquiryStatus>>>,
    }

    impl MockGetInquiries {
        fn with(inquiries: Vec<Inquiry>) -> Self {
            Self {
                inquiries,
                seen_filter: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl IGetInquiriesUseCase for MockGetInquiries {
        async fn execute(
            &self,
            status: Option<InquiryStatus>,
        ) -> Result<Vec<Inquiry>, GetInquiriesError> {
            *self.seen_filter.lock().unwrap() = Some(status);
            Ok(self
                .inquiries
                .iter()
                .filter(|i| status.map_or(true, |s| i.status == s))
                .cloned()
                .collect())
        }
    }

    fn inquiry(name: &str, status: InquiryStatus) -> Inquiry {
        Inquiry {
            id: Uuid::new_v4(),
            name: name.into(),
            email: "someone@example.com".into(),
            phone: None,
            service_type: "seo".into(),
            message: "문의".into(),
            status,
            status_label: status.label().to_owned(),
            created_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn test_lists_all_inquiries() {
        let app_state = TestAppStateBuilder::default()
            .with_get_inquiries(MockGetInquiries::with(vec![
                inquiry("첫번째", InquiryStatus::Pending),
                inquiry("두번째", InquiryStatus::Completed),
            ]))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(accepting_token_provider(Uuid::new_v4()))
                .service(get_inquiries_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/inquiries")
            .insert_header(("Authorization", "Bearer valid.token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][1]["status_label"], "완료");
    }

    #[actix_web::test]
    async fn test_status_filter_is_forwarded() {
        let app_state = TestAppStateBuilder::default()
            .with_get_inquiries(MockGetInquiries::with(vec![
                inquiry("첫번째", InquiryStatus::Pending),
                inquiry("두번째", InquiryStatus::InProgress),
            ]))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(accepting_token_provider(Uuid::new_v4()))
                .service(get_inquiries_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/inquiries?status=in_progress")
            .insert_header(("Authorization", "Bearer valid.token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["status"], "in_progress");
    }

    #[actix_web::test]
    async fn test_unknown_status_filter_is_400() {
        let app_state = TestAppStateBuilder::default()
            .with_get_inquiries(MockGetInquiries::with(vec![]))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(accepting_token_provider(Uuid::new_v4()))
                .service(get_inquiries_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/inquiries?status=archived")
            .insert_header(("Authorization", "Bearer valid.token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_requires_a_session() {
        let app_state = TestAppStateBuilder::default()
            .with_get_inquiries(MockGetInquiries::with(vec![]))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(rejecting_token_provider())
                .service(get_inquiries_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/inquiries")
            .insert_header(("Authorization", "Bearer bad.token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
