use sqlx::PgPool;
use validator::Validate;

use crate::dto::distance_dto::{
    DistanceIngestRequest, DistanceIngestResponse, DistanceLookupResponse, DistanceRequest,
};
use crate::models::DistanceEntry;
use crate::repositories::DistanceRepository;
use crate::services::distance_table::{insert_if_absent, lookup_distance};
use crate::services::unit_conversion::{meters_to_minutes_with, ConversionParams};
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub struct DistanceController {
    repository: DistanceRepository,
    conversion: ConversionParams,
}

impl DistanceController {
    pub fn new(pool: PgPool, conversion: ConversionParams) -> Self {
        Self {
            repository: DistanceRepository::new(pool),
            conversion,
        }
    }

    pub async fn create(&self, request: DistanceRequest) -> Result<DistanceEntry, AppError> {
        request.validate()?;
        let minutes = entry_minutes(&request, &self.conversion)?;
        self.repository
            .create(request.from_location.trim(), request.to_location.trim(), minutes)
            .await
    }

    pub async fn list(&self) -> Result<Vec<DistanceEntry>, AppError> {
        self.repository.find_all().await
    }

    pub async fn update(&self, id: i32, request: DistanceRequest) -> Result<DistanceEntry, AppError> {
        request.validate()?;
        let minutes = entry_minutes(&request, &self.conversion)?;
        self.repository
            .update(id, request.from_location.trim(), request.to_location.trim(), minutes)
            .await?
            .ok_or_else(|| not_found_error("Distance", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Distance", id));
        }
        Ok(())
    }

    pub async fn lookup(&self, from: String, to: String) -> Result<DistanceLookupResponse, AppError> {
        let minutes = lookup_distance(&self.repository, &from, &to).await?;
        Ok(DistanceLookupResponse { from, to, minutes })
    }

    /// Ingesta idempotente: sólo inserta pares ordenados nuevos.
    /// Las entradas con valor 0 se ignoran, como las celdas vacías de la matriz.
    /// El lote se comprueba entero antes de la primera inserción.
    pub async fn ingest(&self, request: DistanceIngestRequest) -> Result<DistanceIngestResponse, AppError> {
        request.validate()?;
        let rows = ingest_rows(&request, &self.conversion)?;

        let mut report = DistanceIngestResponse {
            skipped_empty: request.entries.len() - rows.len(),
            ..Default::default()
        };
        for (from, to, minutes) in rows {
            if insert_if_absent(&self.repository, from, to, minutes).await? {
                report.inserted += 1;
            } else {
                report.skipped_existing += 1;
            }
        }

        tracing::info!(
            "📥 Ingesta terminada: {} nuevas, {} existentes, {} vacías",
            report.inserted,
            report.skipped_existing,
            report.skipped_empty
        );
        Ok(report)
    }
}

/// `(from, to, minutes)` de las entradas no vacías, o el primer error del lote
pub fn ingest_rows<'a>(
    request: &'a DistanceIngestRequest,
    params: &ConversionParams,
) -> Result<Vec<(&'a str, &'a str, f64)>, AppError> {
    request
        .entries
        .iter()
        .filter(|entry| !is_empty_cell(entry))
        .map(|entry| {
            let minutes = entry_minutes(entry, params)?;
            Ok((entry.from_location.as_str(), entry.to_location.as_str(), minutes))
        })
        .collect()
}

/// Minutos de una entrada: `minutes` tal cual o `meters` convertidos.
/// Exactamente uno de los dos debe venir informado.
pub fn entry_minutes(request: &DistanceRequest, params: &ConversionParams) -> Result<f64, AppError> {
    match (request.minutes, request.meters) {
        (Some(minutes), None) => Ok(minutes),
        (None, Some(meters)) => Ok(meters_to_minutes_with(meters, params)),
        (Some(_), Some(_)) => Err(bad_request_error("Provide either 'minutes' or 'meters', not both")),
        (None, None) => Err(bad_request_error("Either 'minutes' or 'meters' is required")),
    }
}

fn is_empty_cell(request: &DistanceRequest) -> bool {
    request.minutes.or(request.meters) == Some(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(minutes: Option<f64>, meters: Option<f64>) -> DistanceRequest {
        DistanceRequest {
            from_location: "Halle 1".into(),
            to_location: "Tor 4".into(),
            minutes,
            meters,
        }
    }

    #[test]
    fn test_entry_minutes_passthrough() {
        let params = ConversionParams::default();
        assert_eq!(entry_minutes(&request(Some(12.5), None), &params).unwrap(), 12.5);
    }

    #[test]
    fn test_entry_minutes_converts_meters() {
        let params = ConversionParams::default();
        assert_eq!(entry_minutes(&request(None, Some(1000.0)), &params).unwrap(), 11.0);
    }

    #[test]
    fn test_entry_minutes_requires_exactly_one() {
        let params = ConversionParams::default();
        assert!(entry_minutes(&request(None, None), &params).is_err());
        assert!(entry_minutes(&request(Some(1.0), Some(1.0)), &params).is_err());
    }

    #[test]
    fn test_ingest_batch_checked_before_any_insert() {
        let params = ConversionParams::default();
        let batch = DistanceIngestRequest {
            entries: vec![
                request(Some(4.0), None),
                request(None, Some(0.0)),
                request(Some(2.0), Some(900.0)),
            ],
        };
        assert!(ingest_rows(&batch, &params).is_err());

        let batch = DistanceIngestRequest {
            entries: vec![request(Some(4.0), None), request(None, Some(0.0)), request(None, Some(1000.0))],
        };
        let rows = ingest_rows(&batch, &params).unwrap();
        assert_eq!(rows, vec![("Halle 1", "Tor 4", 4.0), ("Halle 1", "Tor 4", 11.0)]);
    }

    #[test]
    fn test_zero_cells_are_empty() {
        assert!(is_empty_cell(&request(None, Some(0.0))));
        assert!(is_empty_cell(&request(Some(0.0), None)));
        assert!(!is_empty_cell(&request(None, Some(250.0))));
    }
}
