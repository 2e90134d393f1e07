use std::fmt;

// ---------------------------------------------------------------------------
// Property Catalog – the single authoritative list of known properties
// ---------------------------------------------------------------------------

/// A constant (temperature-independent) scalar property of a compound.
///
/// Variant order matches the key order of the compound file format and is the
/// catalog order used everywhere else in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstantProperty {
    /// Molecular weight, kg/kmol.
    Mw,
    /// Critical temperature, K.
    Tc,
    /// Critical pressure, Pa.
    Pc,
    /// Critical volume, m³/kmol.
    Vc,
    /// Critical compressibility factor.
    Zc,
    /// Melting point, K.
    Mp,
    /// Triple point temperature, K.
    Tpt,
    /// Triple point pressure, Pa.
    Tpp,
    /// Normal boiling point, K.
    Nbp,
    /// Liquid molar volume, m³/kmol.
    Lvol,
    /// Ideal gas enthalpy of formation, J/kmol.
    Hfor,
    /// Ideal gas Gibbs energy of formation, J/kmol.
    Gfor,
    /// Ideal gas absolute entropy, J/(kmol·K).
    Ent,
    /// Standard state enthalpy of formation, J/kmol.
    Hstd,
    /// Standard state Gibbs energy of formation, J/kmol.
    Gstd,
    /// Standard state absolute entropy, J/(kmol·K).
    Sstd,
    /// Enthalpy of fusion at the melting point, J/kmol.
    Hfus,
    /// Standard enthalpy of combustion, J/kmol.
    Hcom,
    /// Acentric factor.
    Acen,
    /// Radius of gyration, m.
    Rg,
    /// Solubility parameter, (J/m³)^0.5.
    Solp,
    /// Dipole moment, C·m.
    Dm,
    /// van der Waals area, m²/kmol.
    Vdwa,
    /// van der Waals volume, m³/kmol.
    Vdwv,
    /// Refractive index.
    Ri,
    /// Flash point, K.
    Fp,
    /// Lower flammability limit, vol %.
    Flvl,
    /// Lower flammability limit temperature, K.
    Fltl,
    /// Upper flammability limit, vol %.
    Flvu,
    /// Upper flammability limit temperature, K.
    Fltu,
    /// Autoignition temperature, K.
    Ait,
    /// Enthalpy of sublimation, J/kmol.
    Hsub,
    /// Parachor.
    Par,
    /// Dielectric constant.
    Dc,
}

impl ConstantProperty {
    /// All constant properties in catalog order.
    pub const ALL: [ConstantProperty; 34] = [
        ConstantProperty::Mw,
        ConstantProperty::Tc,
        ConstantProperty::Pc,
        ConstantProperty::Vc,
        ConstantProperty::Zc,
        ConstantProperty::Mp,
        ConstantProperty::Tpt,
        ConstantProperty::Tpp,
        ConstantProperty::Nbp,
        ConstantProperty::Lvol,
        ConstantProperty::Hfor,
        ConstantProperty::Gfor,
        ConstantProperty::Ent,
        ConstantProperty::Hstd,
        ConstantProperty::Gstd,
        ConstantProperty::Sstd,
        ConstantProperty::Hfus,
        ConstantProperty::Hcom,
        ConstantProperty::Acen,
        ConstantProperty::Rg,
        ConstantProperty::Solp,
        ConstantProperty::Dm,
        ConstantProperty::Vdwa,
        ConstantProperty::Vdwv,
        ConstantProperty::Ri,
        ConstantProperty::Fp,
        ConstantProperty::Flvl,
        ConstantProperty::Fltl,
        ConstantProperty::Flvu,
        ConstantProperty::Fltu,
        ConstantProperty::Ait,
        ConstantProperty::Hsub,
        ConstantProperty::Par,
        ConstantProperty::Dc,
    ];

    /// The key under which this property appears in a compound file.
    pub fn key(self) -> &'static str {
        match self {
            ConstantProperty::Mw => "MW",
            ConstantProperty::Tc => "TC",
            ConstantProperty::Pc => "PC",
            ConstantProperty::Vc => "VC",
            ConstantProperty::Zc => "ZC",
            ConstantProperty::Mp => "MP",
            ConstantProperty::Tpt => "TPT",
            ConstantProperty::Tpp => "TPP",
            ConstantProperty::Nbp => "NBP",
            ConstantProperty::Lvol => "LVOL",
            ConstantProperty::Hfor => "HFOR",
            ConstantProperty::Gfor => "GFOR",
            ConstantProperty::Ent => "ENT",
            ConstantProperty::Hstd => "HSTD",
            ConstantProperty::Gstd => "GSTD",
            ConstantProperty::Sstd => "SSTD",
            ConstantProperty::Hfus => "HFUS",
            ConstantProperty::Hcom => "HCOM",
            ConstantProperty::Acen => "ACEN",
            ConstantProperty::Rg => "RG",
            ConstantProperty::Solp => "SOLP",
            ConstantProperty::Dm => "DM",
            ConstantProperty::Vdwa => "VDWA",
            ConstantProperty::Vdwv => "VDWV",
            ConstantProperty::Ri => "RI",
            ConstantProperty::Fp => "FP",
            ConstantProperty::Flvl => "FLVL",
            ConstantProperty::Fltl => "FLTL",
            ConstantProperty::Flvu => "FLVU",
            ConstantProperty::Fltu => "FLTU",
            ConstantProperty::Ait => "AIT",
            ConstantProperty::Hsub => "HSUB",
            ConstantProperty::Par => "PAR",
            ConstantProperty::Dc => "DC",
        }
    }
}

impl fmt::Display for ConstantProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A temperature-dependent property, backed by a correlation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TdepProperty {
    /// Liquid density, kmol/m³.
    Ldn,
    /// Solid density, kmol/m³.
    Sdn,
    /// Ideal gas heat capacity, J/(kmol·K).
    Icp,
    /// Liquid heat capacity, J/(kmol·K).
    Lcp,
    /// Solid heat capacity, J/(kmol·K).
    Scp,
    /// Heat of vaporization, J/kmol.
    Hvp,
    /// Second virial coefficient, m³/kmol.
    Svr,
    /// Surface tension, N/m.
    St,
    /// Liquid thermal conductivity, W/(m·K).
    Ltc,
    /// Vapor thermal conductivity, W/(m·K).
    Vtc,
    /// Solid thermal conductivity, W/(m·K).
    Stc,
    /// Liquid (saturated) vapor pressure, Pa.
    Vp,
    /// Solid vapor pressure, Pa.
    Svp,
    /// Liquid viscosity, Pa·s.
    Lvs,
    /// Low-pressure vapor viscosity, Pa·s.
    Vvs,
}

impl TdepProperty {
    /// All temperature-dependent properties in catalog order.
    pub const ALL: [TdepProperty; 15] = [
        TdepProperty::Ldn,
        TdepProperty::Sdn,
        TdepProperty::Icp,
        TdepProperty::Lcp,
        TdepProperty::Scp,
        TdepProperty::Hvp,
        TdepProperty::Svr,
        TdepProperty::St,
        TdepProperty::Ltc,
        TdepProperty::Vtc,
        TdepProperty::Stc,
        TdepProperty::Vp,
        TdepProperty::Svp,
        TdepProperty::Lvs,
        TdepProperty::Vvs,
    ];

    /// The key under which this property appears in a compound file.
    pub fn key(self) -> &'static str {
        match self {
            TdepProperty::Ldn => "LDN",
            TdepProperty::Sdn => "SDN",
            TdepProperty::Icp => "ICP",
            TdepProperty::Lcp => "LCP",
            TdepProperty::Scp => "SCP",
            TdepProperty::Hvp => "HVP",
            TdepProperty::Svr => "SVR",
            TdepProperty::St => "ST",
            TdepProperty::Ltc => "LTC",
            TdepProperty::Vtc => "VTC",
            TdepProperty::Stc => "STC",
            TdepProperty::Vp => "VP",
            TdepProperty::Svp => "SVP",
            TdepProperty::Lvs => "LVS",
            TdepProperty::Vvs => "VVS",
        }
    }
}

impl fmt::Display for TdepProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Outcome of looking a property name up in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyClass {
    Constant(ConstantProperty),
    TemperatureDependent(TdepProperty),
    /// Not a property this catalog knows.
    Unknown,
}

/// Classify a property name (file key) as constant, temperature-dependent,
/// or unknown. Lookup is exact; keys are upper-case by convention.
pub fn classify(name: &str) -> PropertyClass {
    if let Some(p) = ConstantProperty::ALL.iter().find(|p| p.key() == name) {
        return PropertyClass::Constant(*p);
    }
    if let Some(p) = TdepProperty::ALL.iter().find(|p| p.key() == name) {
        return PropertyClass::TemperatureDependent(*p);
    }
    PropertyClass::Unknown
}
