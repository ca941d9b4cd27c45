//! Tabla de distancias
//!
//! Mapea un par ordenado de ubicaciones a minutos de trayecto. La consulta
//! prueba primero el par exacto y después el par invertido; no hay
//! interpolación ni búsqueda de caminos a través de ubicaciones intermedias.

use async_trait::async_trait;

use crate::utils::errors::AppResult;

/// Almacén de la matriz de distancias
///
/// Las implementaciones sólo ven pares exactos: la lógica de fallback al
/// par invertido vive en [`lookup_distance`].
#[async_trait]
pub trait DistanceStore: Send + Sync {
    /// Minutos registrados para el par ordenado exacto `(from, to)`
    async fn find_minutes(&self, from: &str, to: &str) -> AppResult<Option<f64>>;

    /// Inserta si no existe fila para el par ordenado exacto.
    /// Devuelve `true` si se insertó.
    async fn insert_if_absent(&self, from: &str, to: &str, minutes: f64) -> AppResult<bool>;
}

/// Minutos entre `from` y `to`: par exacto, luego par invertido, luego `None`
pub async fn lookup_distance<S>(store: &S, from: &str, to: &str) -> AppResult<Option<f64>>
where
    S: DistanceStore + ?Sized,
{
    if let Some(minutes) = store.find_minutes(from, to).await? {
        return Ok(Some(minutes));
    }

    let reverse = store.find_minutes(to, from).await?;
    if reverse.is_none() {
        log::debug!("❓ Sin distancia registrada entre '{}' y '{}'", from, to);
    }
    Ok(reverse)
}

/// Inserción idempotente por par ordenado. Los nombres se recortan antes
/// de guardarse; una fila en sentido inverso es un par distinto.
pub async fn insert_if_absent<S>(store: &S, from: &str, to: &str, minutes: f64) -> AppResult<bool>
where
    S: DistanceStore + ?Sized,
{
    let inserted = store.insert_if_absent(from.trim(), to.trim(), minutes).await?;
    if inserted {
        log::info!("📥 Distancia importada: {} -> {}: {} min", from.trim(), to.trim(), minutes);
    } else {
        log::debug!("⏭️ Distancia ya existente: {} -> {}", from.trim(), to.trim());
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory_store::InMemoryStore;

    #[tokio::test]
    async fn test_forward_lookup() {
        let store = InMemoryStore::new();
        insert_if_absent(&store, "A", "B", 5.0).await.unwrap();

        assert_eq!(lookup_distance(&store, "A", "B").await.unwrap(), Some(5.0));
    }

    #[tokio::test]
    async fn test_reverse_fallback() {
        let store = InMemoryStore::new();
        insert_if_absent(&store, "A", "B", 5.0).await.unwrap();

        assert_eq!(lookup_distance(&store, "B", "A").await.unwrap(), Some(5.0));
    }

    #[tokio::test]
    async fn test_forward_wins_over_reverse() {
        let store = InMemoryStore::new();
        insert_if_absent(&store, "A", "B", 5.0).await.unwrap();
        assert!(insert_if_absent(&store, "B", "A", 7.0).await.unwrap());

        assert_eq!(lookup_distance(&store, "A", "B").await.unwrap(), Some(5.0));
        assert_eq!(lookup_distance(&store, "B", "A").await.unwrap(), Some(7.0));
    }

    #[tokio::test]
    async fn test_unknown_pair_is_absent() {
        let store = InMemoryStore::new();
        insert_if_absent(&store, "A", "B", 5.0).await.unwrap();
        insert_if_absent(&store, "B", "C", 3.0).await.unwrap();

        // sin caminos a través de B
        assert_eq!(lookup_distance(&store, "A", "C").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_if_absent_is_idempotent() {
        let store = InMemoryStore::new();
        assert!(insert_if_absent(&store, "A", "B", 5.0).await.unwrap());
        assert!(!insert_if_absent(&store, "A", "B", 9.0).await.unwrap());

        assert_eq!(store.distance_row_count("A", "B").await, 1);
        assert_eq!(lookup_distance(&store, "A", "B").await.unwrap(), Some(5.0));
    }

    #[tokio::test]
    async fn test_names_are_trimmed_and_case_sensitive() {
        let store = InMemoryStore::new();
        insert_if_absent(&store, "  Halle 1 ", "Tor 4\t", 12.5).await.unwrap();

        assert_eq!(lookup_distance(&store, "Halle 1", "Tor 4").await.unwrap(), Some(12.5));
        assert_eq!(lookup_distance(&store, "halle 1", "Tor 4").await.unwrap(), None);
    }
}
