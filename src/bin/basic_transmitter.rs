use num::complex::Complex64;
use radar_tx_lib::{ChannelSpec, TransmitterSpec};
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 77-81 GHz FMCW, two elements half a wavelength apart, the second one
    // right-hand circularly polarized.
    let rhcp = [
        Complex64::new(0., 0.),
        Complex64::new(1., 0.),
        Complex64::new(0., 1.),
    ];
    let spec = TransmitterSpec::new(vec![77e9, 81e9], vec![0., 80e-6])
        .with_tx_power(10.)
        .with_pulses(128)
        .with_prp(100e-6)
        .with_channels(vec![
            ChannelSpec::at([0., 0., 0.]),
            ChannelSpec::at([0., 1.9e-3, 0.])
                .with_polarization(rhcp)
                .with_azimuth(
                    vec![-90., -30., 0., 30., 90.],
                    vec![-20., 3., 12., 3., -20.],
                ),
        ]);

    let tx = match spec.build() {
        Ok(tx) => tx,
        Err(e) => {
            error!("invalid transmitter: {}", e);
            std::process::exit(1);
        }
    };

    for (i, ch) in tx.channels().iter().enumerate() {
        info!(
            channel = i,
            gain_db = ch.antenna_peak_gain_db,
            "location {:?}",
            ch.location.as_slice()
        );
    }
    info!(
        "last pulse starts at {:.1} μs",
        tx.waveform().pulse_start_time[tx.num_pulses() - 1] * 1e6
    );
}
