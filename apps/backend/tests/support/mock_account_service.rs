//! mockall double for the account service the account routes delegate to.

use async_trait::async_trait;
use mockall::mock;
use restaurant_api::models::account::{LoginDto, RegisterUserDto};
use restaurant_api::services::accounts::AccountService;
use restaurant_api::AppError;

mock! {
    pub Accounts {}

    #[async_trait]
    impl AccountService for Accounts {
        async fn register_user(&self, dto: RegisterUserDto) -> Result<(), AppError>;
        async fn generate_jwt(&self, dto: LoginDto) -> Result<String, AppError>;
    }
}
