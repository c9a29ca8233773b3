// [libs/domain/trending/src/oracle.rs]
//! Puerto del oráculo de liquidez (colaborador externo opcional).

use async_trait::async_trait;

use radar_domain_models::LiquidityVerdict;

/// Consulta de liquidez por contrato.
///
/// El oráculo DEBE fallar abierto: ante timeout o rechazo del proveedor
/// devuelve `Unavailable` y el candidato se conserva. Un fallo aquí jamás
/// aborta un escaneo de trending.
#[async_trait]
pub trait LiquidityOracle: Send + Sync {
    async fn peak_liquidity_usd(&self, contract: &str) -> LiquidityVerdict;
}
// FIN DEL ARCHIVO [libs/domain/trending/src/oracle.rs]
