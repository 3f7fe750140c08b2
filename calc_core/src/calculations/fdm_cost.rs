//! # FDM Print Cost Calculation
//!
//! Estimates the production cost of one FDM (Fused Deposition Modeling)
//! printed part from material, energy, machine wear, labor, shipping, margin
//! and tax inputs.
//!
//! ## Cost Graph
//!
//! ```text
//! material_cost = (material_cost_per_kg / 1000) * material_used_grams
//! energy_cost   = energy_cost_per_kWh * (preheat_h * preheat_kWh + operating_h * operating_kWh)
//! wear_cost     = purchase * (1 + repair) * operating_h / (8766 * lifespan_years)
//! labor_cost    = operator_job_hours * operator_wage_hourly
//!
//! process       = material + energy + wear + labor
//! margin_gain   = process * margin_percentage
//! tax_addition  = (process + margin_gain + shipping_cost) * taxes_percentage
//! total_cost    = process + margin_gain + tax_addition
//! ```
//!
//! Margin is earned on the process cost only. Tax is charged on process cost,
//! margin and shipping, so shipping is taxed but never margined.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::fdm_cost::{calculate, CostInput};
//!
//! let mut input = CostInput::template();
//! input.material_used_grams = 100.0;
//! input.material_cost_per_kg = 20.0;
//! input.operator_job_hours = 1.0;
//! input.operator_wage_hourly = 15.0;
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.material_cost - 2.0).abs() < 1e-9);
//! assert!((result.total_cost - 17.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::units::{Grams, Hours, Seconds, Years};

/// Input parameters for one print job.
///
/// Every field is a non-negative real number; `machine_lifespan_years` must be
/// strictly positive since the wear cost divides by it. Energy-related keys
/// keep the `kWh` spelling of the file format.
///
/// ## JSON Example
///
/// ```json
/// {
///   "material_used_grams": 100.0,
///   "material_cost_per_kg": 20.0,
///   "energy_cost_per_kWh": 0.3,
///   "machine_preheat_time_seconds": 600.0,
///   "machine_preheat_kWh": 0.5,
///   "machine_operating_time_hours": 2.0,
///   "machine_operating_kWh": 0.8,
///   "machine_cost_purchase": 500.0,
///   "machine_lifespan_years": 5.0,
///   "machine_repair_percentage": 0.1,
///   "operator_job_hours": 1.0,
///   "operator_wage_hourly": 15.0,
///   "shipping_cost": 5.0,
///   "margin_percentage": 0.2,
///   "taxes_percentage": 0.1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostInput {
    /// Filament consumed by the job, in grams
    pub material_used_grams: f64,

    /// Filament price per kilogram
    pub material_cost_per_kg: f64,

    /// Electricity price per kWh
    #[serde(rename = "energy_cost_per_kWh")]
    pub energy_cost_per_kwh: f64,

    /// Bed/nozzle preheat duration in seconds
    pub machine_preheat_time_seconds: f64,

    /// Power draw while preheating (kWh per hour of preheat)
    #[serde(rename = "machine_preheat_kWh")]
    pub machine_preheat_kwh: f64,

    /// Print duration in hours
    pub machine_operating_time_hours: f64,

    /// Power draw while printing (kWh per hour of operation)
    #[serde(rename = "machine_operating_kWh")]
    pub machine_operating_kwh: f64,

    /// Printer purchase price
    pub machine_cost_purchase: f64,

    /// Expected printer lifespan in years (must be > 0)
    pub machine_lifespan_years: f64,

    /// Lifetime repair surcharge as a fraction of purchase price (0.1 = 10%)
    pub machine_repair_percentage: f64,

    /// Operator time spent on the job, in hours
    pub operator_job_hours: f64,

    /// Operator hourly wage
    pub operator_wage_hourly: f64,

    /// Flat shipping cost, passed through to the breakdown
    pub shipping_cost: f64,

    /// Margin as a fraction of process cost (0.2 = 20%)
    pub margin_percentage: f64,

    /// Tax as a fraction of process cost + margin + shipping
    pub taxes_percentage: f64,
}

impl CostInput {
    /// An all-zero input for users to fill in.
    ///
    /// Lifespan defaults to one year so that the template itself is a valid
    /// input and computes to an all-zero breakdown.
    pub fn template() -> Self {
        CostInput {
            material_used_grams: 0.0,
            material_cost_per_kg: 0.0,
            energy_cost_per_kwh: 0.0,
            machine_preheat_time_seconds: 0.0,
            machine_preheat_kwh: 0.0,
            machine_operating_time_hours: 0.0,
            machine_operating_kwh: 0.0,
            machine_cost_purchase: 0.0,
            machine_lifespan_years: 1.0,
            machine_repair_percentage: 0.0,
            operator_job_hours: 0.0,
            operator_wage_hourly: 0.0,
            shipping_cost: 0.0,
            margin_percentage: 0.0,
            taxes_percentage: 0.0,
        }
    }

    /// Field values paired with their JSON key names.
    fn fields(&self) -> [(&'static str, f64); 15] {
        [
            ("material_used_grams", self.material_used_grams),
            ("material_cost_per_kg", self.material_cost_per_kg),
            ("energy_cost_per_kWh", self.energy_cost_per_kwh),
            ("machine_preheat_time_seconds", self.machine_preheat_time_seconds),
            ("machine_preheat_kWh", self.machine_preheat_kwh),
            ("machine_operating_time_hours", self.machine_operating_time_hours),
            ("machine_operating_kWh", self.machine_operating_kwh),
            ("machine_cost_purchase", self.machine_cost_purchase),
            ("machine_lifespan_years", self.machine_lifespan_years),
            ("machine_repair_percentage", self.machine_repair_percentage),
            ("operator_job_hours", self.operator_job_hours),
            ("operator_wage_hourly", self.operator_wage_hourly),
            ("shipping_cost", self.shipping_cost),
            ("margin_percentage", self.margin_percentage),
            ("taxes_percentage", self.taxes_percentage),
        ]
    }

    /// Validate input parameters.
    ///
    /// Lifespan must be positive. All other fields must be finite and
    /// non-negative.
    pub fn validate(&self) -> CalcResult<()> {
        if self.machine_lifespan_years.is_nan() || self.machine_lifespan_years <= 0.0 {
            return Err(CalcError::invalid_input(
                "machine_lifespan_years",
                self.machine_lifespan_years.to_string(),
                "Lifespan must be positive",
            ));
        }
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
            }
            if value < 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value cannot be negative"));
            }
        }
        Ok(())
    }
}

/// Cost breakdown for one print job.
///
/// All figures are in the currency of the inputs, unrounded.
///
/// ## JSON Example
///
/// ```json
/// {
///   "material_cost": 2.0,
///   "energy_cost": 0.505,
///   "wear_cost": 0.0251,
///   "labor_cost": 15.0,
///   "shipping_cost": 5.0,
///   "margin_gain": 3.506,
///   "tax_addition": 2.6036,
///   "total_cost": 23.6397
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Filament cost
    pub material_cost: f64,

    /// Electricity for preheat and printing
    pub energy_cost: f64,

    /// Machine amortization (purchase + repairs) for this job's run time
    pub wear_cost: f64,

    /// Operator labor
    pub labor_cost: f64,

    /// Shipping, unchanged from input
    pub shipping_cost: f64,

    /// Margin earned on the process cost
    pub margin_gain: f64,

    /// Tax on process cost, margin and shipping
    pub tax_addition: f64,

    /// Process cost + margin + tax
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Material + energy + wear + labor, before margin, shipping and tax.
    pub fn total_process_cost(&self) -> f64 {
        self.material_cost + self.energy_cost + self.wear_cost + self.labor_cost
    }
}

/// Calculate the cost breakdown for a print job.
///
/// # Arguments
///
/// * `input` - Print job parameters
///
/// # Returns
///
/// * `Ok(CostBreakdown)` - All eight cost figures
/// * `Err(CalcError::InvalidInput)` - If the input fails validation
/// * `Err(CalcError::CalculationFailed)` - If the figures overflow to non-finite values
pub fn calculate(input: &CostInput) -> CalcResult<CostBreakdown> {
    input.validate()?;

    let material_cost = Grams(input.material_used_grams).cost_at(input.material_cost_per_kg);

    let preheat_hours: Hours = Seconds(input.machine_preheat_time_seconds).into();
    let preheat_energy = preheat_hours.value() * input.machine_preheat_kwh;
    let operating_energy = input.machine_operating_time_hours * input.machine_operating_kwh;
    let energy_cost = input.energy_cost_per_kwh * (preheat_energy + operating_energy);

    let lifespan_hours: Hours = Years(input.machine_lifespan_years).into();
    let amortized_machine_cost = input.machine_cost_purchase * (1.0 + input.machine_repair_percentage);
    let wear_cost = (amortized_machine_cost * input.machine_operating_time_hours) / lifespan_hours.value();

    let labor_cost = input.operator_job_hours * input.operator_wage_hourly;

    let total_process_cost = material_cost + energy_cost + wear_cost + labor_cost;
    let margin_gain = total_process_cost * input.margin_percentage;
    let tax_addition = (total_process_cost + margin_gain + input.shipping_cost) * input.taxes_percentage;
    let total_cost = total_process_cost + margin_gain + tax_addition;

    if !total_cost.is_finite() {
        return Err(CalcError::calculation_failed(
            "FDM cost",
            format!("total cost overflowed to {}", total_cost),
        ));
    }

    debug!(
        material_cost,
        energy_cost,
        wear_cost,
        labor_cost,
        total_process_cost,
        total_cost,
        "computed FDM cost breakdown"
    );

    Ok(CostBreakdown {
        material_cost,
        energy_cost,
        wear_cost,
        labor_cost,
        shipping_cost: input.shipping_cost,
        margin_gain,
        tax_addition,
        total_cost,
    })
}
