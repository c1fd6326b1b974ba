use crate::domain::tokens::{Claims, TokenCodec, TokenError, TokenType};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

/// Token codec backed by jsonwebtoken with a symmetric HS256 secret.
///
/// Symmetric signing keeps verification store-free: any instance holding the
/// secret can check an access token without a round trip.
pub struct JwtTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenCodec {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenCodec for JwtTokenCodec {
    fn encode(
        &self,
        token_type: TokenType,
        user_id: i64,
        expires_in: i64,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(token_type, user_id, expires_in);
        let header = Header::new(Algorithm::HS256);

        encode(&header, &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("token encoding failed: {e}");
            TokenError::EncodingFailure
        })
    }

    fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No clock leeway: a token one second past expiry is expired.
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    // Claims were present but did not fit the payload shape.
                    ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => {
                        TokenError::MalformedPayload
                    }
                    _ => TokenError::Invalid,
                }
            })?;

        Ok(token_data.claims)
    }
}
