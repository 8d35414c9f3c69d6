// ABOUTME: Request interceptor adding auth and client identification headers
// ABOUTME: Attaches the bearer token and x-goog-api-client value to every call

use tables_grpc::{client_info_value, API_CLIENT_HEADER};
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;

use crate::error::ClientError;

/// Interceptor that adds the bearer token and client info to requests.
///
/// Header values are validated once at construction.
#[derive(Clone, Debug)]
pub struct HeaderInterceptor {
    authorization: Option<MetadataValue<Ascii>>,
    api_client: MetadataValue<Ascii>,
}

impl HeaderInterceptor {
    pub fn new(token: Option<&str>) -> Result<Self, ClientError> {
        let authorization = token
            .map(|token| {
                format!("Bearer {}", token)
                    .parse::<MetadataValue<Ascii>>()
                    .map_err(|e| ClientError::InvalidToken(e.to_string()))
            })
            .transpose()?;
        let api_client = client_info_value(crate::VERSION)
            .parse()
            .map_err(|_| ClientError::InvalidValue("client info header".to_string()))?;
        Ok(Self {
            authorization,
            api_client,
        })
    }

    pub fn has_token(&self) -> bool {
        self.authorization.is_some()
    }
}

impl Interceptor for HeaderInterceptor {
    fn call(&mut self, mut req: tonic::Request<()>) -> Result<tonic::Request<()>, tonic::Status> {
        if let Some(ref value) = self.authorization {
            req.metadata_mut().insert("authorization", value.clone());
        }
        req.metadata_mut()
            .insert(API_CLIENT_HEADER, self.api_client.clone());
        Ok(req)
    }
}
