use actix_web::{web, HttpResponse, Responder};
use faketime_api_schema::set_faketime::SetFaketimeRequest;
use log::warn;

use crate::api_state::ApiState;

pub async fn set_faketime(
    state: web::Data<ApiState>,
    req: web::Json<SetFaketimeRequest>,
) -> impl Responder {
    match state.write_faketimerc(&req.faketime) {
        Ok(()) => HttpResponse::Ok().content_type("text/html").finish(),
        Err(e) => {
            warn!(
                "failed to write {}: {}",
                state.faketimerc_path.display(),
                e
            );
            HttpResponse::InternalServerError().finish()
        }
    }
}
