//! gRPC transport
//!
//! Serves the same user operations as the REST API over tonic, backed by
//! the shared [`UserService`] so both transports enforce identical rules.

use crate::error::ServerError;
use crate::services::users::UserService;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use userd_proto::v1::user_service_server::{UserService as UserServiceRpc, UserServiceServer};
use userd_proto::v1::{
    CreateUserRequest, CreateUserResponse, DeleteUserRequest, DeleteUserResponse, GetUserRequest,
    GetUserResponse, GetUsersRequest, GetUsersResponse,
};

/// gRPC user service
pub struct UserGrpc {
    users: Arc<UserService>,
}

impl UserGrpc {
    /// Create a new gRPC service over the shared user service
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }

    /// Wrap the service for mounting on a tonic router
    pub fn into_server(self) -> UserServiceServer<Self> {
        UserServiceServer::new(self)
    }
}

/// Map a server error onto the closest gRPC status
fn status_for_error(err: &ServerError) -> Status {
    match err {
        ServerError::BadRequest(msg) => Status::invalid_argument(msg.clone()),
        ServerError::NotFound(msg) => Status::not_found(msg.clone()),
        ServerError::Conflict(msg) => Status::already_exists(msg.clone()),
        ServerError::Auth(msg) => Status::unauthenticated(msg.clone()),
        err => {
            tracing::error!("gRPC internal error: {}", err);
            Status::internal("internal error")
        }
    }
}

fn proto_user(user: &userd_core::User) -> userd_proto::v1::User {
    userd_proto::v1::User {
        id: user.id,
        username: user.username.clone(),
        admin: user.admin,
    }
}

#[tonic::async_trait]
impl UserServiceRpc for UserGrpc {
    async fn get_by_id(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .users
            .get_by_id(req.id)
            .await
            .map_err(|e| status_for_error(&e))?;

        Ok(Response::new(GetUserResponse {
            user: Some(proto_user(&user)),
        }))
    }

    async fn get_users(
        &self,
        _request: Request<GetUsersRequest>,
    ) -> Result<Response<GetUsersResponse>, Status> {
        let users = self
            .users
            .get_all()
            .await
            .map_err(|e| status_for_error(&e))?;

        Ok(Response::new(GetUsersResponse {
            users: users.iter().map(proto_user).collect(),
        }))
    }

    async fn create(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .users
            .register(&req.username, &req.password)
            .await
            .map_err(|e| status_for_error(&e))?;

        Ok(Response::new(CreateUserResponse {
            user: Some(proto_user(&user)),
        }))
    }

    async fn delete(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        let req = request.into_inner();

        self.users
            .delete(req.id)
            .await
            .map_err(|e| status_for_error(&e))?;

        Ok(Response::new(DeleteUserResponse {}))
    }
}
