use ndarray::Array1;
use tracing::{debug, warn};

use crate::{
    array_ext::ArrayExt,
    error::{ConfigError, ConfigResult},
    helper::{ensure_pulse_count, ensure_same_len},
    sequence::ScalarOrSeq,
};

/// Canonical pulse envelope and pulse train timing.
///
/// `f` and `t` describe the instantaneous frequency over one pulse, with `t`
/// anchored so that `t[0] == 0`. The per-pulse arrays (`freq_offset`, `prp`,
/// `pulse_start_time`) all have exactly `pulse_count` entries.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveformProperties {
    // Frequency samples (Hz)
    pub f: Array1<f64>,
    // Time samples (s), same length as f
    pub t: Array1<f64>,
    // max(f) - min(f)
    pub bandwidth: f64,
    // t[-1]
    pub pulse_length: f64,
    pub pulse_count: usize,
    // Per-pulse frequency offset (Hz)
    pub freq_offset: Array1<f64>,
    // Pulse repetition period (s)
    pub prp: Array1<f64>,
    // Start of each pulse (s), without per-channel delay
    pub pulse_start_time: Array1<f64>,
}

/// Normalizes the user supplied waveform description.
///
/// A scalar `f` is a single tone `[f, f]`, a scalar `t` a pulse of duration
/// `[0, t]`. Sequence `t` values are shifted so the first sample is at zero.
/// `freq_offset` defaults to zeros and `prp` to `pulse_length`; scalars are
/// broadcast to `pulse_count` entries.
pub fn normalize_waveform(
    f: &ScalarOrSeq<f64>,
    t: &ScalarOrSeq<f64>,
    pulse_count: usize,
    freq_offset: Option<&ScalarOrSeq<f64>>,
    prp: Option<&ScalarOrSeq<f64>>,
) -> ConfigResult<WaveformProperties> {
    if pulse_count < 1 {
        return Err(ConfigError::InvalidPulseCount(pulse_count));
    }

    let f = f.expand_pair();
    let t = match t {
        ScalarOrSeq::Scalar(_) => t.expand_span(),
        ScalarOrSeq::Seq(_) => t.expand_span().shift_to_origin("t")?,
    };

    let bandwidth = f.peak("f")? - f.floor("f")?;
    let pulse_length = *t.iter().last().ok_or(ConfigError::EmptySequence("t"))?;

    let freq_offset = match freq_offset {
        None => Array1::zeros(pulse_count),
        Some(offset) => offset.broadcast(pulse_count),
    };
    ensure_pulse_count("f_offset", freq_offset.len(), pulse_count)?;

    let prp = match prp {
        None => Array1::from_elem(pulse_count, pulse_length),
        Some(prp) => prp.broadcast(pulse_count),
    };
    let first_prp = *prp.iter().next().ok_or(ConfigError::EmptySequence("prp"))?;

    // Prefix sums anchored on the first period, not on zero: for a non-uniform
    // prp the first pulse starts at sum(prp[..1]) - prp[0] == 0 but later ones
    // are offset by the first period rather than the preceding ones.
    let pulse_start_time = prp.cumsum() - first_prp;

    ensure_same_len("f", f.len(), "t", t.len())?;
    ensure_pulse_count("prp", prp.len(), pulse_count)?;

    let min_prp = prp.floor("prp")?;
    if min_prp < pulse_length {
        return Err(ConfigError::PrpTooShort {
            prp: min_prp,
            pulse_length,
        });
    }

    if !prp.is_uniform() {
        warn!(
            pulse_count,
            "non-uniform prp, pulse start times are prefix sums offset by prp[0]"
        );
    }

    debug!(pulse_count, bandwidth, pulse_length, "waveform normalized");

    Ok(WaveformProperties {
        f,
        t,
        bandwidth,
        pulse_length,
        pulse_count,
        freq_offset,
        prp,
        pulse_start_time,
    })
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use ndarray::{array, Array1};

    use super::normalize_waveform;
    use crate::{error::ConfigError, sequence::ScalarOrSeq};

    #[test]
    fn single_tone() {
        let wf =
            normalize_waveform(&10e9.into(), &1e-6.into(), 10, None, Some(&2e-6.into())).unwrap();
        assert_eq!(wf.f, array![10e9, 10e9]);
        assert_eq!(wf.t, array![0., 1e-6]);
        assert_eq!(wf.bandwidth, 0.);
        assert_eq!(wf.pulse_length, 1e-6);
        assert_eq!(wf.pulse_count, 10);
        assert_eq!(wf.prp, Array1::from_elem(10, 2e-6));
        assert_eq!(wf.pulse_start_time[0], 0.);
        assert_relative_eq!(wf.pulse_start_time[9], 1.8e-5, max_relative = 1e-12);
    }

    #[test]
    fn linear_sweep() {
        let f = ScalarOrSeq::Seq(vec![0., 1e9]);
        let t = ScalarOrSeq::Seq(vec![0., 1e-6]);
        let wf = normalize_waveform(&f, &t, 2, None, Some(&2e-6.into())).unwrap();
        assert_eq!(wf.bandwidth, 1e9);
        assert_eq!(wf.pulse_length, 1e-6);
        assert_eq!(wf.prp, array![2e-6, 2e-6]);
        assert_eq!(wf.pulse_start_time, array![0., 2e-6]);
    }

    #[test]
    fn arbitrary_waveform_time_is_anchored() {
        let f: Vec<f64> = (0..100).map(|i| 9e9 + 2e9 * i as f64 / 99.).collect();
        let t: Vec<f64> = (0..100).map(|i| 5e-6 + 1e-6 * i as f64 / 99.).collect();
        let wf = normalize_waveform(&f.into(), &t.into(), 1, None, None).unwrap();
        assert_eq!(wf.t[0], 0.);
        assert_relative_eq!(wf.pulse_length, 1e-6, max_relative = 1e-9);
        assert_relative_eq!(wf.bandwidth, 2e9, max_relative = 1e-12);
    }

    #[test]
    fn default_prp_is_pulse_length() {
        let wf = normalize_waveform(&1e9.into(), &4e-6.into(), 5, None, None).unwrap();
        assert_eq!(wf.prp, Array1::from_elem(5, 4e-6));
        for (i, start) in wf.pulse_start_time.iter().enumerate() {
            assert_relative_eq!(*start, i as f64 * 4e-6, max_relative = 1e-12);
        }
        assert_eq!(wf.freq_offset, Array1::<f64>::zeros(5));
    }

    #[test]
    fn non_uniform_prp_keeps_first_period_anchor() {
        let prp = ScalarOrSeq::Seq(vec![2e-6, 3e-6, 4e-6]);
        let wf = normalize_waveform(&1e9.into(), &1e-6.into(), 3, None, Some(&prp)).unwrap();
        assert_relative_eq!(
            wf.pulse_start_time,
            array![0., 3e-6, 7e-6],
            epsilon = 1e-18
        );
    }

    #[test]
    fn frequency_offsets() {
        let offsets: Vec<f64> = (0..10).map(|i| i as f64 * 1e5).collect();
        let f_offset = ScalarOrSeq::Seq(offsets.clone());
        let wf = normalize_waveform(&1e9.into(), &1e-6.into(), 10, Some(&f_offset), None).unwrap();
        assert_eq!(wf.freq_offset, Array1::from(offsets));

        let wf = normalize_waveform(&1e9.into(), &1e-6.into(), 5, Some(&1e6.into()), None).unwrap();
        assert_eq!(wf.freq_offset, Array1::from_elem(5, 1e6));

        let f_offset = ScalarOrSeq::Seq(vec![1e6, 2e6, 3e6]);
        let err =
            normalize_waveform(&1e9.into(), &1e-6.into(), 5, Some(&f_offset), None).unwrap_err();
        assert_eq!(err.to_string(), "f_offset length (3) must match pulses (5)");
    }

    #[test]
    fn mismatched_f_and_t() {
        let f = ScalarOrSeq::Seq(vec![0., 1e9]);
        let t = ScalarOrSeq::Seq(vec![0.]);
        let err = normalize_waveform(&f, &t, 1, None, None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LengthMismatch {
                first: "f",
                first_len: 2,
                second: "t",
                second_len: 1,
            }
        );
    }

    #[test]
    fn prp_count_mismatch() {
        let prp: ScalarOrSeq<f64> = vec![2e-6; 9].into();
        let err = normalize_waveform(&1e9.into(), &1e-6.into(), 10, None, Some(&prp)).unwrap_err();
        assert_eq!(err.to_string(), "prp length (9) must match pulses (10)");
    }

    #[test]
    fn prp_shorter_than_pulse() {
        let err = normalize_waveform(&1e9.into(), &1e-6.into(), 1, None, Some(&0.5e-6.into()))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::PrpTooShort {
                prp: 0.5e-6,
                pulse_length: 1e-6,
            }
        );

        let mut prp = vec![2e-6; 10];
        prp[0] = 1e-7;
        let err = normalize_waveform(&1e9.into(), &1e-6.into(), 10, None, Some(&prp.into()))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "All PRP values (1.00e-7 s) must be >= pulse_length (1.00e-6 s)"
        );
    }

    #[test]
    fn zero_pulses_rejected() {
        assert_eq!(
            normalize_waveform(&1e9.into(), &1e-6.into(), 0, None, None),
            Err(ConfigError::InvalidPulseCount(0))
        );
    }

    #[test]
    fn empty_inputs_rejected() {
        let empty: ScalarOrSeq<f64> = Vec::new().into();
        assert_eq!(
            normalize_waveform(&empty, &1e-6.into(), 1, None, None),
            Err(ConfigError::EmptySequence("f"))
        );
        assert_eq!(
            normalize_waveform(&1e9.into(), &empty, 1, None, None),
            Err(ConfigError::EmptySequence("t"))
        );
    }
}
