//! gRPC implementation for the Auth service.
//!
//! Validates request fields, invokes the authentication service, and maps
//! the error taxonomy onto gRPC status codes.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use common::IntoStatus;
use proto::sso::{
    IsAdminRequest, IsAdminResponse, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse,
};

use crate::service::AuthService;
use crate::validation::{check, IsAdminInput, LoginInput, RegisterInput};

/// gRPC service wrapper for [`AuthService`].
pub struct AuthGrpcService {
    service: Arc<dyn AuthService>,
}

impl AuthGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn AuthService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl proto::Auth for AuthGrpcService {
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let req = request.into_inner();

        check(&RegisterInput {
            email: req.email.clone(),
            password: req.password.clone(),
        })
        .map_err(IntoStatus::into_status)?;

        let user_id = self
            .service
            .register(&req.email, &req.password)
            .await
            .map_err(IntoStatus::into_status)?;

        Ok(Response::new(RegisterResponse { user_id }))
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let req = request.into_inner();

        check(&LoginInput {
            email: req.email.clone(),
            password: req.password.clone(),
            app_id: req.app_id,
        })
        .map_err(IntoStatus::into_status)?;

        let token = self
            .service
            .login(&req.email, &req.password, req.app_id)
            .await
            .map_err(IntoStatus::into_status)?;

        Ok(Response::new(LoginResponse { token }))
    }

    async fn is_admin(
        &self,
        request: Request<IsAdminRequest>,
    ) -> Result<Response<IsAdminResponse>, Status> {
        let req = request.into_inner();

        check(&IsAdminInput {
            user_id: req.user_id,
        })
        .map_err(IntoStatus::into_status)?;

        let is_admin = self
            .service
            .is_admin(req.user_id)
            .await
            .map_err(IntoStatus::into_status)?;

        Ok(Response::new(IsAdminResponse { is_admin }))
    }
}
