use mpu6050::SensorData;
use processing::Face;

/// Receiver of one named value, e.g. a sensor entity of the home automation system the readings
/// end up in.
/// 
pub trait Publish
{
    fn publish_state(&mut self, value: f32);
}

impl<F: FnMut(f32)> Publish for F {
    fn publish_state(&mut self, value: f32) {
        self(value)
    }
}

/// The values the sensor can publish, each one is optional and only published when a receiver is
/// set for it.
/// 
#[derive(Debug)]
pub struct SensorOutputs<P>
{
    /// In m/s².
    pub accel_x: Option<P>,
    pub accel_y: Option<P>,
    pub accel_z: Option<P>,

    /// In degrees celsius.
    pub temperature: Option<P>,

    /// In deg/s.
    pub gyro_x: Option<P>,
    pub gyro_y: Option<P>,
    pub gyro_z: Option<P>,

    /// Number of the face that is up, 1 to 12.
    pub face: Option<P>,
}

impl<P> Default for SensorOutputs<P> {
    fn default() -> Self {
        SensorOutputs {
            accel_x: None,
            accel_y: None,
            accel_z: None,
            temperature: None,
            gyro_x: None,
            gyro_y: None,
            gyro_z: None,
            face: None,
        }
    }
}

impl<P: Publish> SensorOutputs<P>
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accel(mut self, x: P, y: P, z: P) -> Self {
        self.accel_x = Some(x);
        self.accel_y = Some(y);
        self.accel_z = Some(z);
        self
    }

    pub fn with_gyro(mut self, x: P, y: P, z: P) -> Self {
        self.gyro_x = Some(x);
        self.gyro_y = Some(y);
        self.gyro_z = Some(z);
        self
    }

    pub fn with_temperature(mut self, temperature: P) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_face(mut self, face: P) -> Self {
        self.face = Some(face);
        self
    }

    /// Names of the outputs and whether a receiver is set for them.
    /// 
    pub fn configured(&self) -> [(&'static str, bool); 8] {
        [
            ("Acceleration X", self.accel_x.is_some()),
            ("Acceleration Y", self.accel_y.is_some()),
            ("Acceleration Z", self.accel_z.is_some()),
            ("Temperature", self.temperature.is_some()),
            ("Gyro X", self.gyro_x.is_some()),
            ("Gyro Y", self.gyro_y.is_some()),
            ("Gyro Z", self.gyro_z.is_some()),
            ("Face", self.face.is_some()),
        ]
    }

    /// Hands every value to its receiver. The face is skipped while it is unknown.
    /// 
    pub fn publish(&mut self, data: &SensorData, face: Option<Face>) {
        publish_to(&mut self.accel_x, data.accel.x);
        publish_to(&mut self.accel_y, data.accel.y);
        publish_to(&mut self.accel_z, data.accel.z);

        publish_to(&mut self.temperature, data.temp);

        publish_to(&mut self.gyro_x, data.gyro.x);
        publish_to(&mut self.gyro_y, data.gyro.y);
        publish_to(&mut self.gyro_z, data.gyro.z);

        if let Some(face) = face {
            publish_to(&mut self.face, face.index() as f32);
        }
    }
}

#[inline]
fn publish_to<P: Publish>(output: &mut Option<P>, value: f32) {
    if let Some(output) = output.as_mut() {
        output.publish_state(value);
    }
}
