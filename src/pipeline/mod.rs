pub mod stage1_aggregate;
pub mod stage2_roc;
pub mod stage3_decision;
pub mod stage4_report;
