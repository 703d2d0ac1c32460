//! Hour categories and the six fixed rate buckets.

use serde::{Deserialize, Serialize};

/// The hour type of a bucket, which selects its multipliers.
///
/// # Example
///
/// ```
/// use shift_rate_engine::models::HourType;
///
/// let hour_type = HourType::Ot;
/// assert_eq!(format!("{:?}", hour_type), "Ot");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HourType {
    /// Regular time.
    #[serde(rename = "REG")]
    Reg,
    /// Overtime.
    #[serde(rename = "OT")]
    Ot,
    /// Double time.
    #[serde(rename = "DT")]
    Dt,
}

/// One of the six rate buckets a worker's hours are split into.
///
/// The `*Sd` buckets hold shift-differential hours. They share the
/// multipliers of their hour type and only differ in the rate the
/// multiplier is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// Regular hours.
    #[serde(rename = "REG")]
    Reg,
    /// Overtime hours.
    #[serde(rename = "OT")]
    Ot,
    /// Double-time hours.
    #[serde(rename = "DT")]
    Dt,
    /// Regular shift-differential hours.
    #[serde(rename = "REG (SD)")]
    RegSd,
    /// Overtime shift-differential hours.
    #[serde(rename = "OT (SD)")]
    OtSd,
    /// Double-time shift-differential hours.
    #[serde(rename = "DT (SD)")]
    DtSd,
}

impl Bucket {
    /// Row order of every preview. Payroll snapshots and the preview table
    /// index rows by this order.
    pub const ORDER: [Bucket; 6] = [
        Bucket::Reg,
        Bucket::Ot,
        Bucket::Dt,
        Bucket::RegSd,
        Bucket::OtSd,
        Bucket::DtSd,
    ];

    /// The display label, identical to the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            Bucket::Reg => "REG",
            Bucket::Ot => "OT",
            Bucket::Dt => "DT",
            Bucket::RegSd => "REG (SD)",
            Bucket::OtSd => "OT (SD)",
            Bucket::DtSd => "DT (SD)",
        }
    }

    /// The hour type whose multipliers this bucket uses.
    pub const fn hour_type(self) -> HourType {
        match self {
            Bucket::Reg | Bucket::RegSd => HourType::Reg,
            Bucket::Ot | Bucket::OtSd => HourType::Ot,
            Bucket::Dt | Bucket::DtSd => HourType::Dt,
        }
    }

    /// Whether the shift-differential delta is added to the base rate.
    pub const fn is_shift_differential(self) -> bool {
        matches!(self, Bucket::RegSd | Bucket::OtSd | Bucket::DtSd)
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
