#[cfg(test)]
mod tle {
    use crate::prelude::*;
    use crate::tests::toolkit::assert_close;
    use crate::tle::gmst82;
    use std::str::FromStr;

    const NAME: &str = "ESTCUBE 1";
    const LINE1: &str = "1 39161U 13021C   14226.14653900  .00000766  00000-0  13565-3 0  3794";
    const LINE2: &str = "2 39161  98.0947 306.6139 0009384 203.0001 157.0783 14.70096049 68114";

    fn estcube() -> TlePropagator {
        TlePropagator::from_tle(Some(NAME), LINE1, LINE2).unwrap()
    }

    #[test]
    fn sidereal_time() {
        let j2000 = Epoch::from_str("2000-01-01T12:00:00 UTC").unwrap();
        assert_close(gmst82(j2000).to_degrees(), 280.4606, 1.0E-2, "gmst @ J2000");

        // one sidereal day later: same angle
        let t = j2000 + Duration::from_seconds(86164.0905);
        assert_close(gmst82(t).to_degrees(), 280.4606, 1.0E-2, "gmst + 1 sidereal day");
    }

    #[test]
    fn elements() {
        let propagator = estcube();
        assert_eq!(propagator.name(), Some(NAME));
        assert_eq!(propagator.norad_id(), 39161);
        assert_close(propagator.revs_per_day(), 14.70096049, 1.0E-8, "mean motion");
    }

    #[test]
    fn propagation() {
        let mut propagator = estcube();
        let t = Epoch::from_str("2014-08-14T03:30:00 UTC").unwrap();

        let position = propagator.position_at(t).unwrap();
        assert_eq!(position.epoch, t);

        let radius_km = position.radius_km();
        assert!(
            (6900.0..7200.0).contains(&radius_km),
            "unrealistic orbital radius: {} km",
            radius_km
        );

        // sun synchronous: sub satellite point covers all latitudes
        let mut satellite = Satellite::new(NAME, propagator).with_norad_id(39161);
        let point = satellite.update(t).unwrap();
        assert!(point.latitude_ddeg.abs() <= 90.0);
        assert!((600.0..800.0).contains(&point.altitude_km));
    }

    #[test]
    fn otaniemi_passes() {
        let observer = ObserverLocation::new(60.1887, 24.8307, 0.0);
        let start = Epoch::from_str("2014-08-14T00:00:00 UTC").unwrap();
        let cfg = ScanConfig::from_duration(start, Duration::from_days(1.0));

        let mut propagator = estcube();
        let passes = scan(&observer, &mut propagator, &Topocentric, &cfg).unwrap();

        assert!(!passes.is_empty(), "no pass over Otaniemi");
        assert!(passes.is_chronological());

        for pass in passes.iter() {
            // low earth orbit: passes last a few minutes at most
            assert!(pass.duration() < Duration::from_seconds(1200.0), "{}", pass);
            assert!(pass.peak_elevation_deg() >= 5.0);
            assert!(pass.peak_elevation_deg() <= 90.0);
        }
    }

    #[test]
    fn invalid_tle() {
        let line1 = "1 39161U 13021C   14226.14653900  .00000766  00000-0  13565-3 0  3795";
        assert!(matches!(
            TlePropagator::from_tle(None, line1, LINE2),
            Err(Error::Tle(_))
        ));
        assert!(matches!(
            TlePropagator::from_tle(None, "garbage", LINE2),
            Err(Error::Tle(_))
        ));
    }
}
