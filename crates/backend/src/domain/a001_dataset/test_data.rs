use chrono::{TimeZone, Utc};
use contracts::domain::a001_dataset::aggregate::DatasetDto;

#[allow(clippy::too_many_arguments)]
fn dto(
    code: &str,
    name: &str,
    description: &str,
    measurement_type: &str,
    detector: &str,
    voltage_kv: f64,
    file_size_mb: f64,
    sample: &str,
    acquired: (i32, u32, u32),
) -> DatasetDto {
    let (y, m, d) = acquired;
    DatasetDto {
        code: Some(code.to_string()),
        name: name.to_string(),
        description: description.to_string(),
        measurement_type: measurement_type.to_string(),
        detector: detector.to_string(),
        voltage_kv,
        file_size_mb,
        sample: sample.to_string(),
        acquired_at: Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).single(),
        file_path: format!("/data/catalog/{}.h5", code.to_lowercase()),
    }
}

/// Representative 4D-STEM, EELS, EDS and CL acquisitions
pub fn demo_catalog() -> Vec<DatasetDto> {
    vec![
        dto(
            "DS-0001",
            "Twisted bilayer WSe2 ptychography",
            "Full 4D-STEM scan for electron ptychography of a 2.1 degree twist",
            "4D-STEM",
            "EMPAD",
            80.0,
            2048.0,
            "WSe2 bilayer",
            (2024, 3, 4),
        ),
        dto(
            "DS-0002",
            "Strain mapping in SiGe channel",
            "Nanobeam CBED patterns across a strained SiGe transistor channel",
            "4D-STEM/CBED",
            "EMPAD",
            300.0,
            1536.0,
            "SiGe FinFET lamella",
            (2024, 3, 11),
        ),
        dto(
            "DS-0003",
            "High-entropy alloy elemental map",
            "EDS spectrum image of a CoCrFeMnNi grain boundary",
            "EDS Hyperspectral Map",
            "Ultra-X EDS",
            300.0,
            640.0,
            "CoCrFeMnNi",
            (2024, 4, 2),
        ),
        dto(
            "DS-0004",
            "Perovskite oxygen K-edge",
            "EELS spectrum image over a LaMnO3/SrTiO3 interface",
            "EELS Hyperspectral",
            "Continuum K3-IS",
            200.0,
            980.0,
            "LaMnO3/SrTiO3",
            (2024, 4, 19),
        ),
        dto(
            "DS-0005",
            "hBN phonon polaritons",
            "Monochromated vibrational EELS across an hBN flake edge",
            "EELS Hyperspectral",
            "Continuum K3-IS",
            60.0,
            1210.0,
            "hBN flake",
            (2024, 5, 7),
        ),
        dto(
            "DS-0006",
            "InGaN quantum well emission",
            "Cathodoluminescence point spectra across five quantum wells",
            "CL Point Spectra",
            "Attolight CL Mirror",
            80.0,
            35.0,
            "InGaN/GaN MQW",
            (2024, 5, 21),
        ),
        dto(
            "DS-0007",
            "Diamond NV centre hyperspectral CL",
            "CL spectrum image of nitrogen-vacancy rich diamond",
            "CL Hyperspectral",
            "Attolight CL Mirror",
            120.0,
            410.0,
            "CVD diamond",
            (2024, 6, 3),
        ),
        dto(
            "DS-0008",
            "Pt nanoparticle catalyst survey",
            "Atomic-resolution HAADF survey of Pt on carbon support",
            "HAADF",
            "Ceta-S CMOS",
            300.0,
            18.5,
            "Pt/C catalyst",
            (2024, 6, 14),
        ),
        dto(
            "DS-0009",
            "Grain structure ADF overview",
            "Low magnification ADF image of a polycrystalline copper film",
            "ADF",
            "Ceta-S CMOS",
            200.0,
            6.2,
            "Cu thin film",
            (2024, 7, 1),
        ),
        dto(
            "DS-0010",
            "Lipid vesicle bright field",
            "Conventional TEM micrographs of unstained vesicles",
            "TEM",
            "Ceta-S CMOS",
            120.0,
            92.0,
            "DOPC vesicles",
            (2024, 7, 16),
        ),
        dto(
            "DS-0011",
            "MoS2 selected area diffraction",
            "SAED tilt series of exfoliated MoS2",
            "Diffraction",
            "Continuum K3-IS",
            200.0,
            240.0,
            "MoS2 flake",
            (2024, 8, 5),
        ),
        dto(
            "DS-0012",
            "Ferroelectric domain walls",
            "4D-STEM differential phase contrast of BiFeO3 domain walls",
            "4D-STEM",
            "EMPAD",
            300.0,
            2450.0,
            "BiFeO3 film",
            (2024, 8, 27),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_dataset::aggregate::Dataset;
    use contracts::domain::a001_dataset::filter_configs;
    use contracts::domain::a001_dataset::filter_configs::{DETECTORS, MEASUREMENT_TYPES};
    use contracts::shared::filters::FilterState;

    #[test]
    fn test_demo_catalog_is_valid() {
        for dto in demo_catalog() {
            let dataset = Dataset::new_for_insert(dto);
            assert!(dataset.validate().is_ok(), "{} failed validation", dataset.code);
            assert!(dataset.acquired_at.is_some());
        }
    }

    #[test]
    fn test_demo_catalog_fits_filter_options() {
        for dto in demo_catalog() {
            assert!(
                MEASUREMENT_TYPES.contains(&dto.measurement_type.as_str()),
                "unknown measurement type {}",
                dto.measurement_type
            );
            assert!(
                DETECTORS.contains(&dto.detector.as_str()),
                "unknown detector {}",
                dto.detector
            );
        }
    }

    #[test]
    fn test_demo_catalog_within_range_bounds() {
        let configs = filter_configs();
        let mut state = FilterState::new();
        for config in &configs {
            if let Some((min, max)) = config.bounds() {
                state.set_range(&config.field, min, max);
            }
        }
        for dto in demo_catalog() {
            let dataset = Dataset::new_for_insert(dto);
            assert!(state.matches(&dataset, &configs), "{} out of bounds", dataset.code);
        }
    }

    #[test]
    fn test_codes_unique() {
        let mut codes: Vec<String> = demo_catalog()
            .into_iter()
            .filter_map(|d| d.code)
            .collect();
        let total = codes.len();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }
}
