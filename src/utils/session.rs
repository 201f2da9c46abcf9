use rocket::http::Cookie;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use rocket_okapi::request::OpenApiFromRequest;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "booking_session";

/// Identifies the caller's booking session.
///
/// Read from the `booking_session` cookie; a missing or malformed cookie
/// starts a new session and sets the cookie on the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, OpenApiFromRequest)]
pub struct BookingSessionId(pub Uuid);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for BookingSessionId {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let cookies = request.cookies();
        let existing = cookies
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

        let id = match existing {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4();
                let mut cookie = Cookie::new(SESSION_COOKIE, id.to_string());
                cookie.set_path("/");
                cookie.set_http_only(true);
                cookies.add(cookie);
                tracing::debug!(session_id = %id, "new booking session");
                id
            }
        };

        Outcome::Success(BookingSessionId(id))
    }
}
