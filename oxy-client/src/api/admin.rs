use super::AdminApi;
use crate::error::ClientResult;
use crate::http::NetworkHttpClient;
use async_trait::async_trait;
use shared::models::{
    Chamber, ChamberCreate, ChamberUpdate, Customer, CustomerCreate, CustomerUpdate,
    DashboardStats, User, UserCreate, UserUpdate,
};

#[async_trait]
impl AdminApi for NetworkHttpClient {
    // ========== Customers ==========

    async fn customers(&self) -> ClientResult<Vec<Customer>> {
        self.get("/admin/customers").await
    }

    async fn create_customer(&self, customer: &CustomerCreate) -> ClientResult<Customer> {
        customer.validate()?;
        self.post("/admin/customers", customer).await
    }

    async fn update_customer(&self, id: i64, update: &CustomerUpdate) -> ClientResult<Customer> {
        update.validate()?;
        self.put(&format!("/admin/customers/{id}"), update).await
    }

    async fn delete_customer(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/admin/customers/{id}")).await
    }

    // ========== Chambers ==========

    async fn chambers(&self) -> ClientResult<Vec<Chamber>> {
        self.get("/admin/chambers").await
    }

    async fn create_chamber(&self, chamber: &ChamberCreate) -> ClientResult<Chamber> {
        chamber.validate()?;
        self.post("/admin/chambers", chamber).await
    }

    async fn update_chamber(&self, id: i64, update: &ChamberUpdate) -> ClientResult<Chamber> {
        update.validate()?;
        self.put(&format!("/admin/chambers/{id}"), update).await
    }

    async fn delete_chamber(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/admin/chambers/{id}")).await
    }

    // ========== Users ==========

    async fn users(&self) -> ClientResult<Vec<User>> {
        self.get("/admin/users").await
    }

    async fn create_user(&self, user: &UserCreate) -> ClientResult<User> {
        user.validate()?;
        self.post("/admin/users", user).await
    }

    async fn update_user(&self, id: i64, update: &UserUpdate) -> ClientResult<User> {
        update.validate()?;
        self.put(&format!("/admin/users/{id}"), update).await
    }

    async fn delete_user(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/admin/users/{id}")).await
    }

    // ========== Dashboard ==========

    async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        self.get("/admin/dashboard-stats").await
    }
}
