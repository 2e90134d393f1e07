//! Writes a few sample compound files into `sample_data/` for hand testing:
//!
//! ```text
//! cargo run --bin generate_sample
//! cargo run -- sample_data/water.cmp sample_data/ethanol.cmp
//! ```
//!
//! Coefficients are representative DIPPR-style values, good enough to make
//! plausible plots; they are not a reviewed data compilation.

use std::fs;
use std::path::Path;

fn main() -> std::io::Result<()> {
    let dir = Path::new("sample_data");
    fs::create_dir_all(dir)?;

    fs::write(dir.join("water.cmp"), WATER)?;
    fs::write(dir.join("ethanol.cmp"), ETHANOL)?;
    fs::write(dir.join("benzene.cmp"), BENZENE)?;

    println!("Wrote water.cmp, ethanol.cmp, benzene.cmp to {}", dir.display());
    Ok(())
}

const WATER: &str = "\
# Water, sample compound file
Name\tWater
ChemID\t1921
MW\t18.01528
TC\t647.096\t# K
PC\t2.2064e7\t# Pa
VC\t0.0559472
ZC\t0.229
MP\t273.15
NBP\t373.15
ACEN\t0.344861
HFOR\t-2.41814e8
# key\teq\ttmin\ttmax\tcoefficients...
LDN\t116\t273.16\t647.096\t17.863\t58.606\t-95.396\t213.89\t-141.26
VP\t101\t273.16\t647.096\t73.649\t-7258.2\t-7.3037\t4.1653e-6\t2
HVP\t106\t273.16\t647.096\t5.2053e7\t0.3199\t-0.212\t0.25795\t0
ICP\t107\t100\t2273.15\t33363\t26790\t2610.5\t8896\t1169
LVS\t101\t273.16\t646.15\t-52.843\t3703.6\t5.866\t-5.879e-29\t10
ST\t106\t273.16\t647.096\t0.17766\t2.567\t-3.3377\t1.9699\t0
";

const ETHANOL: &str = "\
# Ethanol, sample compound file
Name\tEthanol
ChemID\t1102
MW\t46.06844
TC\t514.0
PC\t6.137e6
VC\t0.168
ZC\t0.241
MP\t159.05
NBP\t351.44
ACEN\t0.643558
LDN\t105\t159.05\t514\t1.6288\t0.27469\t514\t0.23178
VP\t101\t159.05\t514\t73.304\t-7122.3\t-7.1424\t2.8853e-6\t2
HVP\t106\t159.05\t514\t5.69e7\t0.3359\t0\t0\t0
ICP\t107\t200\t1500\t49200\t145770\t1662.8\t93900\t744.7
LVS\t101\t200\t440\t7.875\t781.98\t-3.0418\t0\t0
";

const BENZENE: &str = "\
# Benzene, sample compound file
Name\tBenzene
ChemID\t501
MW\t78.11184
TC\t562.05
PC\t4.895e6
VC\t0.256
ZC\t0.268
MP\t278.68
NBP\t353.24
ACEN\t0.2103
LDN\t105\t278.68\t562.05\t1.0259\t0.26666\t562.05\t0.28394
VP\t101\t278.68\t562.05\t83.107\t-6486.2\t-9.2194\t6.9844e-6\t2
HVP\t106\t278.68\t562.05\t4.5346e7\t0.39053\t0\t0\t0
ICP\t107\t200\t1500\t44420\t232050\t1494.2\t172130\t678.15
LVS\t101\t278.68\t545\t7.5117\t294.68\t-2.794\t0\t0
";
