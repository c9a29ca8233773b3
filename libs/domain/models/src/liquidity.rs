// [libs/domain/models/src/liquidity.rs]
//! Veredicto del oráculo de liquidez.

/// Resultado de primera clase de una consulta de liquidez.
///
/// `Unavailable` cubre timeout, rechazo del proveedor y respuestas sin
/// pares; la política del pipeline ante él es fail-open: el candidato se
/// conserva.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiquidityVerdict {
    /// Liquidez pico observada entre todos los pares, en USD.
    Measured(f64),
    /// El oráculo no pudo completar la medición.
    Unavailable,
}
// FIN DEL ARCHIVO [libs/domain/models/src/liquidity.rs]
