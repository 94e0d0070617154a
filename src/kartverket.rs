//! Known conversions published by Kartverket.
//!
//! Sampled from Kartverket's reference UTM33 conversion (norgeskart.no) every
//! 50 km across mainland Norway. Values are © Kartverket.

use crate::grid::{GridPoint, LatLng, SampleTable, GRANULARITY};

/// Number of samples in the embedded dataset
pub const KARTVERKET_SAMPLE_COUNT: usize = 346;

/// `(easting, northing, latitude, longitude)`, sorted by easting then northing.
const SAMPLES: [(i64, i64, f64, f64); KARTVERKET_SAMPLE_COUNT] = [
    (-50000, 6500000, 58.294318615, 5.599072875),
    (-50000, 6550000, 58.737273719, 5.478760473),
    (-50000, 6600000, 59.180039899, 5.354770266),
    (-50000, 6650000, 59.622610464, 5.226944439),
    (-50000, 6700000, 60.064978323, 5.095116004),
    (-50000, 6750000, 60.507135959, 4.959108129),
    (-50000, 6800000, 60.949075389, 4.818733415),
    (-50000, 6850000, 61.390788134, 4.673793104),
    (-50000, 6900000, 61.832265177, 4.524076217),
    (-50000, 6950000, 62.273496922, 4.369358615),
    (0, 6400000, 57.465512314, 6.652390742),
    (0, 6450000, 57.909817592, 6.548862031),
    (0, 6500000, 58.353970602, 6.442228876),
    (0, 6550000, 58.797966398, 6.332361066),
    (0, 6600000, 59.241799745, 6.219120965),
    (0, 6650000, 59.685465095, 6.102362982),
    (0, 6700000, 60.128956567, 5.981933001),
    (0, 6750000, 60.572267922, 5.857667744),
    (0, 6800000, 61.015392528, 5.729394098),
    (0, 6850000, 61.458323339, 5.596928366),
    (0, 6900000, 61.901052858, 5.460075457),
    (0, 6950000, 62.343573096, 5.318627998),
    (0, 7000000, 62.785875541, 5.172365367),
    (0, 7050000, 63.227951108, 5.021052626),
    (50000, 6400000, 57.517799083, 7.478508284),
    (50000, 6450000, 57.963005949, 7.384970624),
    (50000, 6500000, 58.408082864, 7.288618297),
    (50000, 6550000, 58.853025830, 7.189332626),
    (50000, 6600000, 59.297830614, 7.086988124),
    (50000, 6650000, 59.742492724, 6.981452001),
    (50000, 6700000, 60.187007397, 6.872583634),
    (50000, 6750000, 60.631369577, 6.760233987),
    (50000, 6800000, 61.075573885, 6.644244970),
    (50000, 6850000, 61.519614602, 6.524448761),
    (50000, 6900000, 61.963485640, 6.400667039),
    (50000, 6950000, 62.407180506, 6.272710171),
    (50000, 7000000, 62.850692275, 6.140376298),
    (50000, 7050000, 63.294013556, 6.003450353),
    (50000, 7100000, 63.737136441, 5.861702970),
    (100000, 6400000, 57.564688090, 8.307327184),
    (100000, 6450000, 58.010705727, 8.223892826),
    (100000, 6500000, 58.456613603, 8.137939929),
    (100000, 6550000, 58.902408585, 8.049361803),
    (100000, 6600000, 59.348087351, 7.958045598),
    (100000, 6650000, 59.793646374, 7.863871861),
    (100000, 6700000, 60.239081912, 7.766714043),
    (100000, 6750000, 60.684389988, 7.666437976),
    (100000, 6800000, 61.129566370, 7.562901290),
    (100000, 6850000, 61.574606553, 7.455952783),
    (100000, 6900000, 62.019505737, 7.345431735),
    (100000, 6950000, 62.464258799, 7.231167148),
    (100000, 7000000, 62.908860271, 7.112976921),
    (100000, 7050000, 63.353304310, 6.990666940),
    (100000, 7100000, 63.797584659, 6.864030081),
    (100000, 7150000, 64.241694622, 6.732845109),
    (150000, 6400000, 57.606144355, 9.138562786),
    (150000, 6450000, 58.052880609, 9.065332609),
    (150000, 6500000, 58.499525094, 8.989885764),
    (150000, 6550000, 58.946075452, 8.912127957),
    (150000, 6600000, 59.392529178, 8.831959425),
    (150000, 6650000, 59.838883613, 8.749274533),
    (150000, 6700000, 60.285135930, 8.663961337),
    (150000, 6750000, 60.731283123, 8.575901115),
    (150000, 6800000, 61.177321991, 8.484967843),
    (150000, 6850000, 61.623249120, 8.391027636),
    (150000, 6900000, 62.069060871, 8.293938121),
    (150000, 6950000, 62.514753355, 8.193547766),
    (150000, 7000000, 62.960322416, 8.089695132),
    (150000, 7050000, 63.405763609, 7.982208056),
    (150000, 7100000, 63.851072170, 7.870902754),
    (150000, 7150000, 64.296242990, 7.755582828),
    (150000, 7200000, 64.741270588, 7.636038172),
    (200000, 6400000, 57.642136786, 9.971925075),
    (200000, 6450000, 58.089498310, 9.908988211),
    (200000, 6500000, 58.536783794, 9.844141648),
    (200000, 6550000, 58.983991559, 9.777303859),
    (200000, 6600000, 59.431119822, 9.708388563),
    (200000, 6650000, 59.878166684, 9.637304378),
    (200000, 6700000, 60.325130127, 9.563954442),
    (200000, 6750000, 60.772007999, 9.488235993),
    (200000, 6800000, 61.218798005, 9.410039921),
    (200000, 6850000, 61.665497697, 9.329250271),
    (200000, 6900000, 62.112104458, 9.245743699),
    (200000, 6950000, 62.558615487, 9.159388878),
    (200000, 7000000, 63.005027789, 9.070045850),
    (200000, 7050000, 63.451338153, 8.977565299),
    (200000, 7100000, 63.897543132, 8.881787771),
    (200000, 7150000, 64.343639026, 8.782542794),
    (200000, 7200000, 64.789621859, 8.679647921),
    (250000, 6450000, 58.120530663, 10.754552774),
    (250000, 6500000, 58.568360431, 10.700387969),
    (250000, 6550000, 59.016126471, 10.644556418),
    (250000, 6600000, 59.463827616, 10.586985676),
    (250000, 6650000, 59.911462622, 10.527598994),
    (250000, 6700000, 60.359030161, 10.466315002),
    (250000, 6750000, 60.806528816, 10.403047355),
    (250000, 6800000, 61.253957070, 10.337704348),
    (250000, 6850000, 61.701313303, 10.270188499),
    (250000, 6900000, 62.148595775, 10.200396086),
    (250000, 6950000, 62.595802623, 10.128216642),
    (250000, 7000000, 63.042931847, 10.053532401),
    (250000, 7050000, 63.489981301, 9.976217687),
    (250000, 7100000, 63.936948669, 9.896138243),
    (250000, 7150000, 64.383831468, 9.813150485),
    (250000, 7200000, 64.830627014, 9.727100689),
    (250000, 7250000, 65.277332414, 9.637824073),
    (250000, 7300000, 65.723944546, 9.545143797),
    (300000, 6500000, 58.594230093, 11.558300367),
    (300000, 6550000, 59.042454279, 11.513547454),
    (300000, 6600000, 59.490625601, 11.467397959),
    (300000, 6650000, 59.938743353, 11.419790092),
    (300000, 6700000, 60.386806782, 11.370658326),
    (300000, 6750000, 60.834815077, 11.319933114),
    (300000, 6800000, 61.282767366, 11.267540578),
    (300000, 6850000, 61.730662713, 11.213402170),
    (300000, 6900000, 62.178500107, 11.157434290),
    (300000, 6950000, 62.626278462, 11.099547887),
    (300000, 7000000, 63.073996603, 11.039647997),
    (300000, 7050000, 63.521653264, 10.977633254),
    (300000, 7100000, 63.969247075, 10.913395339),
    (300000, 7150000, 64.416776556, 10.846818377),
    (300000, 7200000, 64.864240101, 10.777778268),
    (300000, 7250000, 65.311635972, 10.706141947),
    (300000, 7300000, 65.758962284, 10.631766560),
    (300000, 7350000, 66.206216989, 10.554498553),
    (300000, 7400000, 66.653397863, 10.474172652),
    (300000, 7450000, 67.100502482, 10.390610727),
    (350000, 6500000, 58.614372297, 12.417550489),
    (350000, 6550000, 59.062953679, 12.383934492),
    (350000, 6600000, 59.511491603, 12.349267994),
    (350000, 6650000, 59.959985787, 12.313504420),
    (350000, 6700000, 60.408435927, 12.276594374),
    (350000, 6750000, 60.856841688, 12.238485418),
    (350000, 6800000, 61.305202705, 12.199121842),
    (350000, 6850000, 61.753518580, 12.158444402),
    (350000, 6900000, 62.201788875, 12.116390035),
    (350000, 6950000, 62.650013111, 12.072891552),
    (350000, 7000000, 63.098190765, 12.027877289),
    (350000, 7050000, 63.546321265, 11.981270735),
    (350000, 7100000, 63.994403979, 11.932990113),
    (350000, 7150000, 64.442438221, 11.882947924),
    (350000, 7200000, 64.890423233, 11.831050432),
    (350000, 7250000, 65.338358187, 11.777197106),
    (350000, 7300000, 65.786242172, 11.721279992),
    (350000, 7350000, 66.234074190, 11.663183017),
    (350000, 7400000, 66.681853144, 11.602781211),
    (350000, 7450000, 67.129577827, 11.539939842),
    (350000, 7500000, 67.577246915, 11.474513444),
    (350000, 7550000, 68.024858947, 11.406344731),
    (350000, 7600000, 68.472412318, 11.335263372),
    (400000, 6500000, 58.628771049, 13.277806753),
    (400000, 6550000, 59.077608034, 13.255371593),
    (400000, 6600000, 59.526408306, 13.232234634),
    (400000, 6650000, 59.975171887, 13.208364716),
    (400000, 6700000, 60.423898797, 13.183728786),
    (400000, 6750000, 60.872589044, 13.158291754),
    (400000, 6800000, 61.321242626, 13.132016334),
    (400000, 6850000, 61.769859532, 13.104862872),
    (400000, 6900000, 62.218439738, 13.076789153),
    (400000, 6950000, 62.666983202, 13.047750189),
    (400000, 7000000, 63.115489870, 13.017697995),
    (400000, 7050000, 63.563959668, 12.986581330),
    (400000, 7100000, 64.012392498, 12.954345419),
    (400000, 7150000, 64.460788246, 12.920931642),
    (400000, 7200000, 64.909146765, 12.886277194),
    (400000, 7250000, 65.357467881, 12.850314702),
    (400000, 7300000, 65.805751389, 12.812971806),
    (400000, 7350000, 66.253997048, 12.774170688),
    (400000, 7400000, 66.702204574, 12.733827548),
    (400000, 7450000, 67.150373638, 12.691852018),
    (400000, 7500000, 67.598503865, 12.648146510),
    (400000, 7550000, 68.046594818, 12.602605478),
    (400000, 7600000, 68.494646002, 12.555114591),
    (400000, 7650000, 68.942656850, 12.505549805),
    (450000, 6600000, 59.535363301, 14.115933919),
    (450000, 6650000, 59.984288728, 14.103990685),
    (450000, 6700000, 60.433181920, 14.091663934),
    (450000, 6750000, 60.882043091, 14.078936082),
    (450000, 6800000, 61.330872460, 14.065788443),
    (450000, 6850000, 61.779670248, 14.052201140),
    (450000, 6900000, 62.228436679, 14.038153015),
    (450000, 6950000, 62.677171978, 14.023621515),
    (450000, 7000000, 63.125876370, 14.008582584),
    (450000, 7050000, 63.574550085, 13.993010532),
    (450000, 7100000, 64.023193347, 13.976877893),
    (450000, 7150000, 64.471806385, 13.960155271),
    (450000, 7200000, 64.920389421, 13.942811169),
    (450000, 7250000, 65.368942678, 13.924811794),
    (450000, 7300000, 65.817466376, 13.906120847),
    (450000, 7350000, 66.265960731, 13.886699289),
    (450000, 7400000, 66.714425951, 13.866505072),
    (450000, 7450000, 67.162862238, 13.845492849),
    (450000, 7500000, 67.611269790, 13.823613639),
    (450000, 7550000, 68.059648790, 13.800814462),
    (450000, 7600000, 68.507999414, 13.777037919),
    (450000, 7650000, 68.956321822, 13.752221723),
    (450000, 7700000, 69.404616160, 13.726298165),
    (450000, 7750000, 69.852882555, 13.699193516),
    (500000, 7050000, 63.578081455, 15.000000000),
    (500000, 7100000, 64.026794921, 15.000000000),
    (500000, 7150000, 64.475480453, 15.000000000),
    (500000, 7200000, 64.924138397, 15.000000000),
    (500000, 7250000, 65.372769109, 15.000000000),
    (500000, 7300000, 65.821372950, 15.000000000),
    (500000, 7350000, 66.269950289, 15.000000000),
    (500000, 7400000, 66.718501499, 15.000000000),
    (500000, 7450000, 67.167026960, 15.000000000),
    (500000, 7500000, 67.615527061, 15.000000000),
    (500000, 7550000, 68.064002193, 15.000000000),
    (500000, 7600000, 68.512452755, 15.000000000),
    (500000, 7650000, 68.960879154, 15.000000000),
    (500000, 7700000, 69.409281798, 15.000000000),
    (500000, 7750000, 69.857661103, 15.000000000),
    (500000, 7800000, 70.306017493, 15.000000000),
    (550000, 7050000, 63.574550085, 16.006989468),
    (550000, 7100000, 64.023193347, 16.023122107),
    (550000, 7150000, 64.471806385, 16.039844729),
    (550000, 7200000, 64.920389421, 16.057188831),
    (550000, 7250000, 65.368942678, 16.075188206),
    (550000, 7300000, 65.817466376, 16.093879153),
    (550000, 7350000, 66.265960731, 16.113300711),
    (550000, 7400000, 66.714425951, 16.133494928),
    (550000, 7450000, 67.162862238, 16.154507151),
    (550000, 7500000, 67.611269790, 16.176386361),
    (550000, 7550000, 68.059648790, 16.199185538),
    (550000, 7600000, 68.507999414, 16.222962081),
    (550000, 7650000, 68.956321822, 16.247778277),
    (550000, 7700000, 69.404616160, 16.273701835),
    (550000, 7750000, 69.852882555, 16.300806484),
    (550000, 7800000, 70.301121115, 16.329172660),
    (600000, 7300000, 65.805751389, 17.187028194),
    (600000, 7350000, 66.253997048, 17.225829312),
    (600000, 7400000, 66.702204574, 17.266172452),
    (600000, 7450000, 67.150373638, 17.308147982),
    (600000, 7500000, 67.598503865, 17.351853490),
    (600000, 7550000, 68.046594818, 17.397394522),
    (600000, 7600000, 68.494646002, 17.444885409),
    (600000, 7650000, 68.942656850, 17.494450195),
    (600000, 7700000, 69.390626714, 17.546223695),
    (600000, 7750000, 69.838554862, 17.600352687),
    (600000, 7800000, 70.286440460, 17.656997264),
    (600000, 7850000, 70.734282567, 17.716332383),
    (600000, 7900000, 71.182080113, 17.778549621),
    (650000, 7400000, 66.681853144, 18.397218789),
    (650000, 7450000, 67.129577827, 18.460060158),
    (650000, 7500000, 67.577246915, 18.525486556),
    (650000, 7550000, 68.024858947, 18.593655269),
    (650000, 7600000, 68.472412318, 18.664736628),
    (650000, 7650000, 68.919905257, 18.738915387),
    (650000, 7700000, 69.367335811, 18.816392278),
    (650000, 7750000, 69.814701823, 18.897385774),
    (650000, 7800000, 70.262000910, 18.982134091),
    (650000, 7850000, 70.709230436, 19.070897461),
    (650000, 7900000, 71.156387477, 19.163960729),
    (700000, 7500000, 67.547528209, 19.696379477),
    (700000, 7550000, 67.994472168, 19.787005768),
    (700000, 7600000, 68.441331218, 19.881493105),
    (700000, 7650000, 68.888101924, 19.980085397),
    (700000, 7700000, 69.334780531, 20.083047537),
    (700000, 7750000, 69.781362914, 20.190667702),
    (700000, 7800000, 70.227844553, 20.303259959),
    (700000, 7850000, 70.674220475, 20.421167225),
    (700000, 7900000, 71.120485202, 20.544764653),
    (700000, 7950000, 71.566632693, 20.674463492),
    (750000, 7550000, 67.955477609, 20.976498375),
    (750000, 7600000, 68.401448413, 21.094148117),
    (750000, 7650000, 68.847295367, 21.216889430),
    (750000, 7700000, 69.293012432, 21.345049076),
    (750000, 7750000, 69.738593009, 21.478982337),
    (750000, 7800000, 70.184029874, 21.619076175),
    (750000, 7850000, 70.629315115, 21.765752828),
    (750000, 7900000, 71.074440040, 21.919473902),
    (750000, 7950000, 71.519395088, 22.080745043),
    (800000, 7550000, 67.907930275, 22.161204318),
    (800000, 7600000, 68.352822188, 22.301715837),
    (800000, 7650000, 68.797547419, 22.448279872),
    (800000, 7700000, 69.242097204, 22.601282270),
    (800000, 7750000, 69.686461985, 22.761142260),
    (800000, 7800000, 70.130631321, 22.928316120),
    (800000, 7850000, 70.574593792, 23.103301330),
    (800000, 7900000, 71.018336882, 23.286641295),
    (800000, 7950000, 71.461846844, 23.478930724),
    (800000, 8000000, 71.905108557, 23.680821785),
    (850000, 7600000, 68.295523041, 23.503236054),
    (850000, 7650000, 68.738932839, 23.673237504),
    (850000, 7700000, 69.182114229, 23.850664032),
    (850000, 7750000, 69.625054249, 24.035995164),
    (850000, 7800000, 70.067738767, 24.229752352),
    (850000, 7850000, 70.510152343, 24.432503609),
    (850000, 7900000, 70.952278080, 24.644868774),
    (850000, 7950000, 71.394097451, 24.867525494),
    (850000, 8000000, 71.835590103, 25.101216048),
    (900000, 7600000, 68.229633259, 24.697778580),
    (900000, 7650000, 68.671538843, 24.890776348),
    (900000, 7700000, 69.113156061, 25.092148162),
    (900000, 7750000, 69.554468154, 25.302429757),
    (900000, 7800000, 69.995456867, 25.522203132),
    (900000, 7850000, 70.436102289, 25.752101591),
    (900000, 7900000, 70.876382651, 25.992815442),
    (900000, 7950000, 71.316274119, 26.245098470),
    (900000, 8000000, 71.755750548, 26.509775293),
    (950000, 7600000, 68.155246434, 25.884447287),
    (950000, 7650000, 68.595464565, 26.099948099),
    (950000, 7700000, 69.035327834, 26.324730206),
    (950000, 7750000, 69.474815337, 26.559381101),
    (950000, 7800000, 69.913904328, 26.804538308),
    (950000, 7850000, 70.352570023, 27.060894735),
    (950000, 7900000, 70.790785366, 27.329204710),
    (950000, 7950000, 71.228520769, 27.610290823),
    (950000, 8000000, 71.665743819, 27.905051670),
    (1000000, 7600000, 68.072466914, 27.062383742),
    (1000000, 7650000, 68.510820454, 27.299846088),
    (1000000, 7700000, 68.948746599, 27.547451784),
    (1000000, 7750000, 69.386219995, 27.805835345),
    (1000000, 7800000, 69.823213094, 28.075684481),
    (1000000, 7850000, 70.259695910, 28.357745680),
    (1000000, 7900000, 70.695635749, 28.652830479),
    (1000000, 7950000, 71.130996909, 28.961822545),
    (1000000, 8000000, 71.565740329, 29.285685674),
    (1050000, 7700000, 68.853540603, 28.759404347),
    (1050000, 7750000, 69.288818088, 29.040833789),
    (1050000, 7800000, 69.723527475, 29.334629412),
    (1050000, 7850000, 70.157633312, 29.641585023),
    (1050000, 7900000, 70.591096999, 29.962562306),
    (1050000, 7950000, 71.023876438, 30.298498033),
    (1050000, 8000000, 71.455925635, 30.650412170),
    (1100000, 7700000, 68.749848533, 29.959732341),
    (1100000, 7750000, 69.182756497, 30.263476277),
    (1100000, 7800000, 69.615003212, 30.580425646),
    (1100000, 7850000, 70.046547566, 30.911415181),
    (1100000, 7900000, 70.477344853, 31.257349527),
    (1100000, 7950000, 70.907346383, 31.619210470),
    (1100000, 8000000, 71.336499039, 31.998065022),
    (1150000, 7700000, 68.637818707, 31.147635763),
    (1150000, 7750000, 69.068192145, 31.472923890),
    (1150000, 7800000, 69.497806515, 31.812193348),
    (1150000, 7850000, 69.926614912, 32.166313358),
    (1150000, 7900000, 70.354566402, 32.536224330),
    (1150000, 7950000, 70.781605591, 32.922944985),
    (1150000, 8000000, 71.207672141, 33.327580318),
    (1200000, 7750000, 68.945291091, 32.668400953),
    (1200000, 7800000, 69.372113063, 33.029122340),
    (1200000, 7850000, 69.798021401, 33.405433605),
    (1200000, 7900000, 70.222958892, 33.798303802),
    (1200000, 7950000, 70.646863404, 34.208780653),
    (1200000, 8000000, 71.069667369, 34.637998261),
];

impl SampleTable {
    /// The embedded Kartverket table at [`GRANULARITY`] spacing.
    ///
    /// Covers eastings -50 000 to 1 200 000 and northings 6 400 000 to
    /// 8 000 000, with ragged edges following the coastline and borders.
    pub fn kartverket() -> SampleTable {
        SampleTable::from_trusted(
            GRANULARITY,
            SAMPLES
                .iter()
                .map(|&(e, n, lat, lng)| (GridPoint::new(e, n), LatLng::new(lat, lng))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_pass_builder_validation() {
        let validated = SampleTable::from_entries(
            GRANULARITY,
            SAMPLES
                .iter()
                .map(|&(e, n, lat, lng)| (GridPoint::new(e, n), LatLng::new(lat, lng))),
        )
        .unwrap();
        assert_eq!(validated, SampleTable::kartverket());
        assert_eq!(validated.len(), KARTVERKET_SAMPLE_COUNT);
    }

    #[test]
    fn test_known_entries() {
        let table = SampleTable::kartverket();
        assert_eq!(
            table.lookup(GridPoint::new(150_000, 6_850_000)),
            Some(LatLng::new(61.623249120, 8.391027636))
        );
        assert_eq!(
            table.lookup(GridPoint::new(-50_000, 6_500_000)),
            Some(LatLng::new(58.294318615, 5.599072875))
        );
        // Coverage is ragged: the western column starts further north.
        assert_eq!(table.lookup(GridPoint::new(-50_000, 6_400_000)), None);
    }

    #[test]
    fn test_extent() {
        let bounds = SampleTable::kartverket().bounds();
        assert_eq!(bounds.min_easting, -50_000);
        assert_eq!(bounds.max_easting, 1_200_000);
        assert_eq!(bounds.min_northing, 6_400_000);
        assert_eq!(bounds.max_northing, 8_000_000);
    }
}
