// [libs/domain/detection/src/lib.rs]
/*!
 * =================================================================
 * APARATO: CHAIN DETECTION STRATA (V11.0 - MULTI-CHAIN)
 * CLASIFICACIÓN: DOMAIN ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: EXTRACCIÓN PURA DE CONTRATOS POR CADENA
 *
 * VISION HIPER-HOLÍSTICA:
 * Cada cadena aporta un detector autónomo tras el contrato
 * `ChainDetector`; el registro los despacha en orden fijo sobre cada
 * mensaje entrante. Una cadena nueva se integra implementando el trait
 * con cobertura de patrones disjunta y un `chain_name` fresco, sin
 * tocar ningún estrato aguas abajo.
 * =================================================================
 */

pub mod detector;
pub mod evm;
pub mod registry;
pub mod solana;

pub use detector::ChainDetector;
pub use evm::EvmDetector;
pub use registry::DetectorRegistry;
pub use solana::SolanaDetector;
// FIN DEL ARCHIVO [libs/domain/detection/src/lib.rs]
