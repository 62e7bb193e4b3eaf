use std::sync::Arc;
use student_service::config::ServiceConfig;
use student_service::services::InMemoryStore;
use student_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let mut config = ServiceConfig::load().expect("Failed to load configuration");
        config.port = 0; // Random port for testing

        let store = Arc::new(InMemoryStore::new());
        let app = Application::build_with_store(config, store)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
        }
    }

    pub async fn create_student(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/students", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_student(&self, name: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/students/{}", self.address, name))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_students_by_college(&self, college: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/students/college/{}", self.address, college))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn list_students(&self) -> reqwest::Response {
        self.client
            .get(format!("{}/students", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn update_student(
        &self,
        old_name: &str,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.client
            .put(format!("{}/students/{}", self.address, old_name))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_student(&self, name: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}/students/{}", self.address, name))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// A complete, valid creation payload.
pub fn student_payload(name: &str, college: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "college": college,
        "father": "Bob",
        "mother": "Carol",
        "marks10": 90.5,
        "marks12": 88.0,
        "school10": "PS1",
        "school12": "PS2"
    })
}
