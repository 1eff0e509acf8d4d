mod run_audit;
mod run_dual_audit;

pub use run_audit::RunAuditUseCase;
pub use run_dual_audit::RunDualAuditUseCase;
