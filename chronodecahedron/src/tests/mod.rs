mod sensor;
