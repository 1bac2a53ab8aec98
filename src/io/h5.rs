use crate::config::ResultLayout;
use crate::error::{Result, ResultsError};
use crate::io::results::{Report, States};
use hdf5::types::TypeDescriptor;
use hdf5::{Dataset, File, Group, H5Type};
use log::debug;
use ndarray::ArrayD;
use std::path::Path;

// Read the pressure and saturation arrays from the states group.
// The file handle is dropped (and closed) on every return path.
pub fn read_states(path: &Path, layout: &ResultLayout) -> Result<States> {
    let file = open_file(path)?;
    let group = open_group(&file, path, &layout.states_group)?;

    let pressure = read_array(&group, path, &layout.pressure)?;
    let saturation = read_array(&group, path, &layout.saturation)?;

    Ok(States::new(pressure, saturation))
}

// Read the iteration count and simulation time from the report group
pub fn read_report(path: &Path, layout: &ResultLayout) -> Result<Report> {
    let file = open_file(path)?;
    let group = open_group(&file, path, &layout.report_group)?;

    let iterations = read_count(&group, path, &layout.iterations)?;
    let simulation_time = read_float(&group, path, &layout.simulation_time)?;

    Ok(Report::new(iterations, simulation_time))
}

fn open_file(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(ResultsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!("Opening result file {}", path.display());
    File::open(path)
        .map_err(|e| ResultsError::format(path, format!("not a readable HDF5 file: {e}")))
}

fn open_group(file: &File, path: &Path, name: &str) -> Result<Group> {
    if !file.link_exists(name) {
        return Err(ResultsError::format(path, format!("missing group `/{name}`")));
    }

    file.group(name)
        .map_err(|e| ResultsError::format(path, format!("`/{name}` is not a group: {e}")))
}

fn open_dataset(group: &Group, path: &Path, name: &str) -> Result<(Dataset, String)> {
    let object = format!("{}/{}", group.name().trim_end_matches('/'), name);

    if !group.link_exists(name) {
        return Err(ResultsError::format(
            path,
            format!("missing dataset `{object}`"),
        ));
    }

    let dataset = group
        .dataset(name)
        .map_err(|e| ResultsError::format(path, format!("`{object}` is not a dataset: {e}")))?;

    Ok((dataset, object))
}

// Element type of a dataset, restricted to integers and floats
fn numeric_type(dataset: &Dataset, path: &Path, object: &str) -> Result<TypeDescriptor> {
    let dtype = dataset
        .dtype()
        .map_err(|e| ResultsError::io(path, object, e))?;
    let descriptor = dtype.to_descriptor().map_err(|e| {
        ResultsError::format(path, format!("unsupported element type in `{object}`: {e}"))
    })?;

    match descriptor {
        TypeDescriptor::Integer(_) | TypeDescriptor::Unsigned(_) | TypeDescriptor::Float(_) => {
            Ok(descriptor)
        }
        other => Err(ResultsError::format(
            path,
            format!("`{object}` is not numeric (found {other:?})"),
        )),
    }
}

fn read_array(group: &Group, path: &Path, name: &str) -> Result<ArrayD<f64>> {
    let (dataset, object) = open_dataset(group, path, name)?;
    numeric_type(&dataset, path, &object)?;

    let values = dataset
        .read_dyn::<f64>()
        .map_err(|e| ResultsError::io(path, &object, e))?;

    debug!("Read {} with shape {:?}", object, values.shape());
    Ok(values)
}

// Equivalent of `dataset[()]`: rank-0 datasets and single-element arrays
fn read_single<T: H5Type + Copy>(dataset: &Dataset, path: &Path, object: &str) -> Result<T> {
    if dataset.size() != 1 {
        return Err(ResultsError::format(
            path,
            format!(
                "expected a scalar in `{object}`, found shape {:?}",
                dataset.shape()
            ),
        ));
    }

    if dataset.ndim() == 0 {
        return dataset
            .read_scalar::<T>()
            .map_err(|e| ResultsError::io(path, object, e));
    }

    let values = dataset
        .read_raw::<T>()
        .map_err(|e| ResultsError::io(path, object, e))?;

    values.first().copied().ok_or_else(|| {
        ResultsError::format(path, format!("`{object}` holds no value"))
    })
}

fn read_float(group: &Group, path: &Path, name: &str) -> Result<f64> {
    let (dataset, object) = open_dataset(group, path, name)?;
    numeric_type(&dataset, path, &object)?;

    let value = read_single::<f64>(&dataset, path, &object)?;
    debug!("Read {} = {}", object, value);
    Ok(value)
}

fn read_count(group: &Group, path: &Path, name: &str) -> Result<i64> {
    let (dataset, object) = open_dataset(group, path, name)?;

    let value = match numeric_type(&dataset, path, &object)? {
        TypeDescriptor::Integer(_) => read_single::<i64>(&dataset, path, &object)?,
        TypeDescriptor::Unsigned(_) => {
            let raw = read_single::<u64>(&dataset, path, &object)?;
            i64::try_from(raw).map_err(|_| {
                ResultsError::format(path, format!("`{object}` = {raw} does not fit a count"))
            })?
        }
        _ => {
            let raw = read_single::<f64>(&dataset, path, &object)?;
            float_to_count(raw).ok_or_else(|| {
                ResultsError::format(path, format!("`{object}` = {raw} is not a whole number"))
            })?
        }
    };

    debug!("Read {} = {}", object, value);
    Ok(value)
}

fn float_to_count(value: f64) -> Option<i64> {
    // 2^63 is the first f64 above i64::MAX
    let upper = 9.223_372_036_854_775_808e18;
    if value.is_finite() && value.fract() == 0.0 && value >= i64::MIN as f64 && value < upper {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_convert_to_counts() {
        assert_eq!(float_to_count(42.0), Some(42));
        assert_eq!(float_to_count(0.0), Some(0));
        assert_eq!(float_to_count(-3.0), Some(-3));
    }

    #[test]
    fn fractional_or_non_finite_floats_are_rejected() {
        assert_eq!(float_to_count(42.5), None);
        assert_eq!(float_to_count(f64::NAN), None);
        assert_eq!(float_to_count(f64::INFINITY), None);
        assert_eq!(float_to_count(1e19), None);
    }
}
