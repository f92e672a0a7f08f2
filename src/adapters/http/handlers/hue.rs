use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{
  dtos::{
    GetDataRequest, GetDataResponse, HueRecordPayload, HueRgbPayload, SaveResultRequest,
    SaveResultResponse,
  },
  errors::HttpError,
};
use crate::application::hue::{
  GetRecordsCommand, GetRecordsUseCase, SaveResultCommand, SaveResultUseCase,
};

/// Handler for storing a finished quiz
///
/// POST /api/hue-are-you/save-result
/// Body: SaveResultRequest (JSON)
/// Response: SaveResultResponse (JSON) with status 201
pub async fn save_result_handler(
  request: web::Json<SaveResultRequest>,
  use_case: web::Data<Arc<SaveResultUseCase>>,
) -> Result<HttpResponse, HttpError> {
  let request = request.into_inner();

  let command = SaveResultCommand {
    user_name: request.user_name,
    record_name: request.record.name,
    choices: request.record.choice,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(SaveResultResponse {
    hue: HueRgbPayload {
      r: response.r,
      g: response.g,
      b: response.b,
    },
    message: response.message,
  }))
}

/// Handler for fetching stored records
///
/// POST /api/hue-are-you/get-data
/// Body: GetDataRequest (JSON)
/// Response: GetDataResponse (JSON) with status 200
pub async fn get_data_handler(
  request: web::Json<GetDataRequest>,
  use_case: web::Data<Arc<GetRecordsUseCase>>,
) -> Result<HttpResponse, HttpError> {
  let request = request.into_inner();

  let [from, to] = request.data_range[..] else {
    return Err(HttpError::Validation {
      field: "data-range".to_string(),
      message: "data-range must be [from, to]".to_string(),
    });
  };

  let command = GetRecordsCommand {
    user_id: request.user_id,
    token: request.token,
    from,
    to,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(GetDataResponse {
    records: response
      .records
      .into_iter()
      .map(|record| HueRecordPayload {
        name: record.name,
        choice: record.choices,
      })
      .collect(),
  }))
}
