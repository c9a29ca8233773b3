// [libs/domain/models/src/lib.rs]
/*!
 * =================================================================
 * APARATO: RADAR DOMAIN MODELS (V9.0 - PIPELINE ALIGNED)
 * CLASIFICACIÓN: DOMAIN CORE (ESTRATO L2)
 * RESPONSABILIDAD: CONTRATOS DE DATOS CANÓNICOS DEL PIPELINE
 *
 * VISION HIPER-HOLÍSTICA:
 * Define las entidades que fluyen entre estratos: el evento de chat
 * entrante, la mención de contrato detectada, los agregados de la
 * ventana deslizante y el registro de alerta. Los estados no
 * excepcionales (duplicado, oráculo indisponible, envío fallido) son
 * enums de primera clase, nunca errores.
 * =================================================================
 */

pub mod alert;
pub mod ingress;
pub mod liquidity;
pub mod mention;
pub mod trending;

pub use alert::{AlertRecord, DeliveryOutcome};
pub use ingress::ChatMessageEvent;
pub use liquidity::LiquidityVerdict;
pub use mention::{ContractMatch, RecordOutcome};
pub use trending::{MentionAggregate, TrendingToken};
// FIN DEL ARCHIVO [libs/domain/models/src/lib.rs]
